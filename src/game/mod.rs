//! Core game logic module for Snake
//!
//! Everything in here is free of I/O: the engine takes one sampled [`Action`]
//! per tick and answers with the render events that describe what changed.

pub mod action;
pub mod config;
pub mod draw;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{GameConfig, Palette, Rgb, MAX_GRID_SIDE};
pub use draw::{ColorTag, Drawable, RenderEvent};
pub use engine::{Control, GameEngine, TickOutcome};
pub use food::{Food, FoodPlacer};
pub use grid::{wrap, Cell, Grid};
pub use snake::{MoveOutcome, Snake};
pub use state::GameState;
