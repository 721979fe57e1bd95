use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::{
    action::Action,
    config::GameConfig,
    draw::{ColorTag, RenderEvent},
    food::{Food, FoodPlacer},
    snake::{MoveOutcome, Snake},
    state::GameState,
};
use crate::error::ConfigError;

/// Whether the driving loop should keep calling [`GameEngine::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Result of a game tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub control: Control,
    /// Board changes to hand to the renderer, in paint order
    pub events: Vec<RenderEvent>,
    /// The snake's move this tick; `None` when the tick was a quit
    pub movement: Option<MoveOutcome>,
    pub ate_food: bool,
    /// The snake hit itself and was reset
    pub collided: bool,
}

impl TickOutcome {
    fn stop() -> Self {
        Self {
            control: Control::Stop,
            events: Vec::new(),
            movement: None,
            ate_food: false,
            collided: false,
        }
    }
}

/// Runs the per-tick protocol over a [`GameState`]
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    state: GameState,
    placer: FoodPlacer<R>,
}

impl GameEngine<StdRng> {
    /// Create a new game engine seeded from OS entropy
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = config.grid();
        let snake = Snake::new(config.start_cell(), grid);
        let mut placer = FoodPlacer::new(grid, rng);
        let food = Food::at(placer.place(snake.segments()));

        Ok(Self {
            config,
            state: GameState::new(snake, food, grid),
            placer,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for driving specific board layouts
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Events that repaint the whole board
    pub fn frame(&self) -> Vec<RenderEvent> {
        self.state.frame()
    }

    /// Execute one tick: turn, move, resolve collision or food, report changes.
    pub fn tick(&mut self, action: Action) -> TickOutcome {
        let direction = match action {
            Action::Quit => return TickOutcome::stop(),
            Action::Move(direction) => Some(direction),
            Action::Continue => None,
        };

        if let Some(direction) = direction {
            self.state.snake.set_direction(direction);
        }

        let movement = self.state.snake.advance();
        self.state.ticks += 1;
        trace!(tick = self.state.ticks, head = ?movement.new_head, "snake moved");

        if movement.self_collided {
            debug!(
                tick = self.state.ticks,
                length = self.state.snake.length(),
                "self-collision, resetting snake"
            );
            self.state.snake.reset();
            self.state.resets += 1;
            self.state.food_eaten = 0;
            self.keep_food_clear_of_snake();

            return TickOutcome {
                control: Control::Continue,
                events: self.state.frame(),
                movement: Some(movement),
                ate_food: false,
                collided: true,
            };
        }

        let ate_food = self.state.food.is_at(movement.new_head);
        if ate_food {
            self.state.snake.grow();
            self.state.food_eaten += 1;
            self.state.food = Food::at(self.placer.place(self.state.snake.segments()));
            debug!(
                length = self.state.snake.length(),
                food = ?self.state.food.position,
                "food eaten"
            );
        }

        TickOutcome {
            control: Control::Continue,
            events: self.move_events(&movement),
            movement: Some(movement),
            ate_food,
            collided: false,
        }
    }

    /// Start a fresh run: snake back to the start cell and new food
    pub fn reset(&mut self) -> Vec<RenderEvent> {
        self.state.snake.reset();
        self.state.food_eaten = 0;
        self.state.food = Food::at(self.placer.place(self.state.snake.segments()));
        debug!("game restarted");
        self.state.frame()
    }

    /// Incremental repaint after a normal move.
    ///
    /// The vacated tail is erased before anything is drawn, since the head or
    /// fresh food may land on that very cell this tick.
    fn move_events(&self, movement: &MoveOutcome) -> Vec<RenderEvent> {
        let mut events = Vec::with_capacity(4);
        if let Some(cell) = movement.last_vacated {
            events.push(RenderEvent::erase(cell));
        }
        if let Some(&neck) = self.state.snake.segments().get(1) {
            events.push(RenderEvent::draw(neck, ColorTag::Body));
        }
        events.push(RenderEvent::draw(movement.new_head, ColorTag::Head));
        events.push(RenderEvent::draw(self.state.food.position, ColorTag::Food));
        events
    }

    // After a reset the snake sits on the start cell, which the old food may cover.
    fn keep_food_clear_of_snake(&mut self) {
        if self.state.snake.occupies(self.state.food.position) {
            self.state.food = Food::at(self.placer.place(self.state.snake.segments()));
        }
    }
}
