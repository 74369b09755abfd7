//! Status endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use scorch_core::DEFAULT_BOARD_SIZE;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub games: usize,
    pub default_board_size: i32,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    let games = state.games.read().unwrap().len();

    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: "rust",
        games,
        default_board_size: DEFAULT_BOARD_SIZE,
    })
}
