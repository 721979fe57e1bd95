//! Headless mode that drives the engine with random input
//!
//! Useful for soak-testing the engine and for reproducing a run: the same
//! seed always yields the same food placements and the same turns.
//!
//! # Example
//!
//! ```rust
//! use wrap_snake::game::GameConfig;
//! use wrap_snake::modes::{SimulateConfig, SimulateMode};
//!
//! let config = SimulateConfig {
//!     ticks: 1_000,
//!     seed: 7,
//!     ..SimulateConfig::new(GameConfig::small())
//! };
//! let summary = SimulateMode::new(config).unwrap().run();
//! assert_eq!(summary.ticks, 1_000);
//! ```

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::game::{Action, Control, Direction, GameConfig, GameEngine};
use crate::metrics::GameMetrics;

/// Configuration for a headless run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    /// Number of ticks to run
    pub ticks: u64,

    /// Chance per tick of pressing a random direction key
    pub turn_probability: f64,

    /// Log progress every N ticks
    pub log_frequency: u64,

    /// Seed for both food placement and the random input
    pub seed: u64,

    pub game_config: GameConfig,
}

impl SimulateConfig {
    pub fn new(game_config: GameConfig) -> Self {
        Self {
            ticks: 10_000,
            turn_probability: 0.2,
            log_frequency: 1_000,
            seed: 0,
            game_config,
        }
    }
}

/// Totals reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    pub ticks: u64,
    pub resets: u32,
    pub food_eaten: u32,
    pub high_score: u32,
}

pub struct SimulateMode {
    engine: GameEngine,
    input_rng: StdRng,
    metrics: GameMetrics,
    config: SimulateConfig,
}

impl SimulateMode {
    pub fn new(config: SimulateConfig) -> Result<Self> {
        let engine = GameEngine::seeded(config.game_config.clone(), config.seed)
            .context("Failed to build game engine")?;

        Ok(Self {
            engine,
            input_rng: StdRng::seed_from_u64(config.seed.wrapping_add(1)),
            metrics: GameMetrics::new(),
            config,
        })
    }

    pub fn run(&mut self) -> SimulationSummary {
        info!(
            ticks = self.config.ticks,
            seed = self.config.seed,
            width = self.config.game_config.grid_width,
            height = self.config.game_config.grid_height,
            "starting simulation"
        );

        for tick in 1..=self.config.ticks {
            let action = self.random_action();
            let outcome = self.engine.tick(action);
            if outcome.control == Control::Stop {
                break;
            }
            self.metrics.on_tick(&outcome, self.engine.state());

            if self.config.log_frequency > 0 && tick % self.config.log_frequency == 0 {
                info!(
                    tick,
                    score = self.engine.state().score(),
                    high_score = self.metrics.high_score,
                    resets = self.engine.state().resets,
                    "progress"
                );
            }
        }

        let summary = self.summary();
        info!(?summary, "simulation finished");
        summary
    }

    fn random_action(&mut self) -> Action {
        if self.input_rng.gen_bool(self.config.turn_probability.clamp(0.0, 1.0)) {
            let direction = Direction::ALL[self.input_rng.gen_range(0..Direction::ALL.len())];
            Action::Move(direction)
        } else {
            Action::Continue
        }
    }

    fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            ticks: self.engine.state().ticks,
            resets: self.engine.state().resets,
            food_eaten: self.metrics.food_eaten,
            high_score: self.metrics.high_score,
        }
    }
}
