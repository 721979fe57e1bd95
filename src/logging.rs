//! Tracing subscriber setup
//!
//! The interactive mode owns the terminal, so its logs can only go to a file.
//! Headless runs log to stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "wrap_snake=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    File(PathBuf),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

pub fn init_tracing(target: &LogTarget) -> Result<()> {
    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(env_filter())
            .try_init()
            .context("Failed to install tracing subscriber"),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(env_filter())
                .try_init()
                .context("Failed to install tracing subscriber")
        }
    }
}
