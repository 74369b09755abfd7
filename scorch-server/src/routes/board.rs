//! Board geometry endpoint

use axum::{extract::Query, http::StatusCode, Json};
use scorch_core::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use scorch_core::{iter_board, Hex, DEFAULT_BOARD_SIZE, DIRECTIONS};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Deserialize)]
pub struct BoardQuery {
    pub size: Option<i32>,
}

#[derive(Serialize)]
pub struct BoardInfo {
    pub radius: i32,
    pub hexes: Vec<Hex>,
    pub directions: Vec<Hex>,
    pub direction_names: Vec<&'static str>,
}

/// Get board geometry
pub async fn get_board(
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardInfo>, (StatusCode, Json<Value>)> {
    let radius = query.size.unwrap_or(DEFAULT_BOARD_SIZE);
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&radius) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("size must be between {} and {}", MIN_BOARD_SIZE, MAX_BOARD_SIZE)
            })),
        ));
    }

    Ok(Json(BoardInfo {
        radius,
        hexes: iter_board(radius).collect(),
        directions: DIRECTIONS.to_vec(),
        direction_names: vec![
            "right",
            "bottom right",
            "bottom left",
            "left",
            "top left",
            "top right",
        ],
    }))
}
