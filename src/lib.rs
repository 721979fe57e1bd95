//! Wrap Snake - a terminal Snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game engine (game module), free of any I/O
//! - Keyboard mapping (input module)
//! - TUI rendering driven by engine render events (render module)
//! - Session statistics (metrics module)
//! - Interactive and headless execution modes (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
