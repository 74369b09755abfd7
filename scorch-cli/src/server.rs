//! Serve command - start the HTTP server for the browser board
//!
//! Thin wrapper: the routes and session handling live in `scorch-server`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use scorch_server::{run_server, ServerConfig, DEFAULT_MAX_GAMES};

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,

    /// Directory containing the front-end static files
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// Pause before the computer replies to a human move, in milliseconds
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,

    /// Games kept in memory; the oldest (finished ones first) are dropped beyond this
    #[arg(long, default_value_t = DEFAULT_MAX_GAMES)]
    pub max_games: usize,
}

/// Run serve command
pub fn run(args: ServerArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!(
        "Starting Scorch server on port {} (computer delay {} ms, up to {} games)",
        config.port,
        config.ai_delay_ms,
        config.max_games
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config))
}

fn configure_server(args: &ServerArgs) -> Result<ServerConfig> {
    validate_static_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().to_string(),
        ai_delay_ms: args.delay_ms,
        max_games: args.max_games,
    })
}

/// Missing static dir only warns (the API still works); a file in its place is an error
fn validate_static_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Only the API will be served.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!(
            "Static path exists but is not a directory: {}",
            path.display()
        );
    }

    Ok(())
}
