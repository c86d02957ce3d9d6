use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use grid_snake::game::{GameConfig, GameSession};
use grid_snake::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "40")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// Milliseconds between two moves of the snake
    #[arg(long, default_value = "300")]
    move_interval: f64,

    /// Milliseconds between two food spawns
    #[arg(long, default_value = "1500")]
    spawn_interval: f64,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to install log subscriber: {err}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal UI owns stderr, so logs only go to a file
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig {
        move_interval_ms: cli.move_interval,
        food_spawn_interval_ms: cli.spawn_interval,
        ..GameConfig::new(cli.width, cli.height)
    };

    let session = match cli.seed {
        Some(seed) => GameSession::seeded(config, seed),
        None => GameSession::new(config),
    }
    .context("Invalid game configuration")?;

    let mut human_mode = HumanMode::new(session);
    human_mode.run().await?;

    Ok(())
}
