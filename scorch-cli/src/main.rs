//! Scorch CLI - Command-line interface
//!
//! Commands:
//! - play: Play against the computer in the terminal
//! - simulate: Pit the computer against itself and report statistics
//! - serve: Start the HTTP server for the browser board

mod play_cmd;
mod render;
mod server;
mod simulate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scorch_core::GameConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scorch")]
#[command(about = "Scorched-earth hex capture game")]
struct Cli {
    /// Random seed for reproducible boards and computer play
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Game config JSON file (board_size, seed)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal
    Play(play_cmd::PlayArgs),
    /// Computer vs computer games
    Simulate(simulate::SimulateArgs),
    /// Start the HTTP server
    Serve(server::ServerArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let base = load_config(cli.config.as_ref(), cli.seed)?;

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, base),
        Commands::Simulate(args) => simulate::run(args, base),
        Commands::Serve(args) => server::run(args),
    }
}

/// Config file (if any) with the command-line seed layered on top
fn load_config(path: Option<&PathBuf>, seed: Option<u64>) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GameConfig::default(),
    };

    if seed.is_some() {
        config.seed = seed;
    }

    Ok(config)
}
