use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Single-screen snake arcade game")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length in board units
    #[arg(long)]
    board_size: Option<i32>,

    /// Cell side length in board units
    #[arg(long)]
    cell_size: Option<i32>,

    /// Delay between ticks in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Do not ring the terminal bell when food is eaten
    #[arg(long)]
    mute: bool,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if self.cell_size.is_some() || self.board_size.is_some() {
            let resized = GameConfig::new(
                self.cell_size.unwrap_or(config.cell_size),
                self.board_size.unwrap_or(config.board_size),
            );
            config.cell_size = resized.cell_size;
            config.board_size = resized.board_size;
            config.initial_cell = resized.initial_cell;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.mute {
            config.sound = false;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

// The terminal UI owns the screen, so logs only ever go to a file.
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = cli.game_config()?;
    tracing::info!(?config, "starting");

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
