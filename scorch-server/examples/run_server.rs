//! Example to run the Scorch server standalone
//!
//! Run with: cargo run -p scorch-server --example run_server

use scorch_server::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::default();

    println!("Starting Scorch server on port {}", config.port);
    println!("Open http://localhost:{}/", config.port);

    run_server(config).await
}
