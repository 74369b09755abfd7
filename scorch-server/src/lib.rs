//! Scorch Server - HTTP API for the browser board
//!
//! This crate provides the web backend:
//! - REST API for game sessions (new game, legal moves, submit move, computer move, delete)
//! - Board geometry for the renderer
//! - Static file serving for the front end

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;

pub use state::{GameSession, ServerState, DEFAULT_MAX_GAMES};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    /// Pause between the human's move and the computer's reply
    pub ai_delay_ms: u64,
    /// Stored sessions before the oldest are evicted
    pub max_games: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: "static".to_string(),
            ai_delay_ms: 500,
            max_games: DEFAULT_MAX_GAMES,
        }
    }
}

impl ServerConfig {
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board geometry
        .route("/api/board", get(routes::board::get_board))
        // Game API
        .route("/api/game/start", post(routes::game::start_game))
        .route(
            "/api/game/:id",
            get(routes::game::get_game).delete(routes::game::delete_game),
        )
        .route("/api/game/:id/move", post(routes::game::make_player_move))
        .route("/api/game/:id/ai-move", post(routes::game::make_ai_move))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.ai_delay()).with_max_games(config.max_games));
    let router = create_router(&config, state);

    tracing::info!("Scorch server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
