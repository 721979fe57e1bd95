use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wrap_snake::game::{GameConfig, GameEngine};
use wrap_snake::logging::{init_tracing, LogTarget};
use wrap_snake::modes::{HumanMode, SimulateConfig, SimulateMode};

#[derive(Parser)]
#[command(name = "wrap_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<i32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<i32>,

    /// Simulation ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Seed for food placement (and input, in simulate mode)
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to run in simulate mode
    #[arg(long, default_value = "10000")]
    ticks: u64,

    /// Write logs to this file (play mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Play,
    /// Run headless with random input and print a summary
    Simulate,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn log_target(&self) -> LogTarget {
        match (&self.log_file, &self.mode) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Mode::Simulate) => LogTarget::Stderr,
            (None, Mode::Play) => LogTarget::Off,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_target())?;

    let config = cli.game_config()?;

    match cli.mode {
        Mode::Play => {
            let engine = match cli.seed {
                Some(seed) => GameEngine::seeded(config, seed),
                None => GameEngine::new(config),
            }
            .context("Failed to build game engine")?;
            let mut human_mode = HumanMode::new(engine);
            human_mode.run().await?;
        }
        Mode::Simulate => {
            let sim_config = SimulateConfig {
                ticks: cli.ticks,
                seed: cli.seed.unwrap_or_default(),
                ..SimulateConfig::new(config)
            };
            let summary = SimulateMode::new(sim_config)?.run();

            println!("Ticks:       {}", summary.ticks);
            println!("Resets:      {}", summary.resets);
            println!("Food eaten:  {}", summary.food_eaten);
            println!("High score:  {}", summary.high_score);
        }
    }

    Ok(())
}
