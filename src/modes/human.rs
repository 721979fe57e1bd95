use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::game::{Action, Control, Direction, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Canvas, Renderer};

pub struct HumanMode {
    engine: GameEngine,
    canvas: Canvas,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Latest direction key since the last tick
    pending_direction: Option<Direction>,
    quit_requested: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let config = engine.config();
        let mut canvas = Canvas::new(config.grid_width, config.grid_height);
        canvas.apply(&engine.frame());
        let renderer = Renderer::new(config.palette.clone());

        Self {
            engine,
            canvas,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            pending_direction: None,
            quit_requested: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            width = self.engine.config().grid_width,
            height = self.engine.config().grid_height,
            tick_rate = self.engine.config().tick_rate,
            "starting interactive game"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            high_score = self.metrics.high_score,
            games = self.metrics.games_played,
            food = self.metrics.food_eaten,
            "game closed"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.canvas, self.engine.state(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    self.pending_direction = Some(direction);
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.quit_requested = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// Sample the pending input and run one engine tick
    fn next_action(&mut self) -> Action {
        if self.quit_requested {
            return Action::Quit;
        }
        Action::from(self.pending_direction.take())
    }

    fn update_game(&mut self) {
        let action = self.next_action();
        let outcome = self.engine.tick(action);

        if outcome.control == Control::Stop {
            self.should_quit = true;
            return;
        }

        self.canvas.apply(&outcome.events);
        self.metrics.on_tick(&outcome, self.engine.state());
    }

    fn reset_game(&mut self) {
        let events = self.engine.reset();
        self.canvas.apply(&events);
        self.metrics.on_restart();
        self.pending_direction = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
