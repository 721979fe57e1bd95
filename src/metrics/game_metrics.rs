use std::time::{Duration, Instant};

use crate::game::{GameState, TickOutcome};

/// Statistics for one playing session, across resets
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub food_eaten: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            food_eaten: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Close the current run, whether it ended in a collision or a manual restart
    pub fn on_restart(&mut self) {
        self.games_played += 1;
        self.on_game_start();
    }

    /// Fold one tick into the session totals
    pub fn on_tick(&mut self, outcome: &TickOutcome, state: &GameState) {
        if outcome.ate_food {
            self.food_eaten += 1;
        }
        if outcome.collided {
            self.on_restart();
        }
        self.high_score = self.high_score.max(state.score());
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, Cell, Direction, Food, GameConfig, GameEngine, Snake};

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_survives_reset() {
        let mut engine = GameEngine::seeded(GameConfig::default(), 1).unwrap();
        let mut metrics = GameMetrics::new();

        engine.state_mut().food = Food::at(Cell::new(17, 12));
        let outcome = engine.tick(Action::Continue);
        metrics.on_tick(&outcome, engine.state());
        assert_eq!(metrics.high_score, 1);
        assert_eq!(metrics.food_eaten, 1);

        let grid = engine.state().grid;
        engine.state_mut().snake = Snake::with_segments(
            vec![
                Cell::new(5, 6),
                Cell::new(6, 6),
                Cell::new(6, 5),
                Cell::new(5, 5),
                Cell::new(4, 5),
            ],
            Direction::Left,
            grid,
        );
        let outcome = engine.tick(Action::Move(Direction::Up));
        metrics.on_tick(&outcome, engine.state());

        assert!(outcome.collided);
        assert_eq!(metrics.games_played, 1);
        assert_eq!(metrics.high_score, 1);
        assert_eq!(engine.state().score(), 0);
    }

    #[test]
    fn test_restart_counts_a_game() {
        let mut metrics = GameMetrics::new();
        metrics.high_score = 3;
        metrics.on_restart();
        metrics.on_restart();
        assert_eq!(metrics.games_played, 2);
        assert_eq!(metrics.high_score, 3);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
