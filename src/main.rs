use anyhow::{Context, Result};
use clap::Parser;
use rect_snake::game::{GameConfig, GameEngine};
use rect_snake::modes::InteractiveMode;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rect_snake")]
#[command(version, about = "Snake game in the terminal")]
struct Cli {
    /// Window width, in board units (a segment is 20)
    #[arg(long)]
    width: Option<f32>,

    /// Window height, in board units
    #[arg(long)]
    height: Option<f32>,

    /// JSON file with a game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for treat placement
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    /// Configuration file (or defaults) with command line overrides applied
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        // Stderr is where the game is drawn, so stay quiet unless asked
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
                .init();
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = cli.game_config().inspect_err(|err| log::error!("{:#}", err))?;
    log::info!(
        "starting on a {}x{} window",
        config.window_width,
        config.window_height
    );

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let mut mode = InteractiveMode::with_engine(engine);
    mode.run()
        .await
        .inspect_err(|err| log::error!("{:#}", err))?;

    Ok(())
}
