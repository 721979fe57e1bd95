use super::draw::{Drawable, RenderEvent};
use super::food::Food;
use super::grid::Grid;
use super::snake::Snake;

/// Complete game state, owned by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid: Grid,
    /// Ticks since the engine was created
    pub ticks: u64,
    /// Self-collisions so far
    pub resets: u32,
    /// Food eaten since the last reset
    pub food_eaten: u32,
}

impl GameState {
    pub fn new(snake: Snake, food: Food, grid: Grid) -> Self {
        Self {
            snake,
            food,
            grid,
            ticks: 0,
            resets: 0,
            food_eaten: 0,
        }
    }

    /// Current score, derived from the snake's target length
    pub fn score(&self) -> u32 {
        self.snake.score() as u32
    }

    /// Events that repaint the whole board from scratch
    pub fn frame(&self) -> Vec<RenderEvent> {
        let mut events = vec![RenderEvent::Clear];
        events.extend(self.snake.render_events());
        events.extend(self.food.render_events());
        events
    }
}
