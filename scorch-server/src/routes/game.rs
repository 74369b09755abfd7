//! Game API routes
//!
//! Start a game, read its state, submit the human move (optionally followed
//! by the computer's reply) and ask the computer to move.

use crate::state::{GameSession, ServerState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scorch_core::{
    mobility, GameConfig, GameState, GreedyAI, Hex, MoveRecord, Player, TileCounts, TileKind,
    DEFAULT_BOARD_SIZE,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct StartGameRequest {
    pub board_size: Option<i32>,
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub q: i32,
    pub r: i32,
    /// Optional; checked against `q` and `r` when present
    pub s: Option<i32>,
    /// Let the computer answer right away
    #[serde(default = "default_auto_reply")]
    pub auto_reply: bool,
}

fn default_auto_reply() -> bool {
    true
}

#[derive(Serialize)]
pub struct TileView {
    #[serde(flatten)]
    pub hex: Hex,
    pub kind: TileKind,
}

/// Snapshot of a game for the renderer
#[derive(Serialize)]
pub struct GameView {
    pub id: u64,
    pub board_size: i32,
    pub tiles: Vec<TileView>,
    pub player1_position: Hex,
    pub player2_position: Hex,
    pub current_player: Player,
    pub highlighted: Vec<Hex>,
    /// Landing hexes open to each piece, Player1 first
    pub mobility: [usize; 2],
    pub game_over: bool,
    pub winner: Option<Player>,
    pub message: &'static str,
    pub moves_played: usize,
    pub last_move: Option<MoveRecord>,
    pub counts: TileCounts,
}

impl GameView {
    fn new(id: u64, state: &GameState) -> Self {
        let mut tiles: Vec<TileView> = state
            .board()
            .tiles()
            .map(|(hex, kind)| TileView { hex, kind })
            .collect();
        tiles.sort_by_key(|tile| tile.hex);

        Self {
            id,
            board_size: state.board().size(),
            tiles,
            player1_position: state.position(Player::Player1),
            player2_position: state.position(Player::Player2),
            current_player: state.current_player(),
            highlighted: state.legal_moves().to_vec(),
            mobility: [Player::Player1, Player::Player2]
                .map(|player| mobility(state.board(), state.position(player))),
            game_over: state.is_game_over().is_some(),
            winner: state.is_game_over(),
            message: state.status_message(),
            moves_played: state.history().len(),
            last_move: state.history().last().copied(),
            counts: state.tile_counts(),
        }
    }
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub moved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_move: Option<MoveRecord>,
    pub game: GameView,
}

/// JSON error with a status code
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(id: u64) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("No game with id {}", id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Start a new game
pub async fn start_game(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<StartGameRequest>,
) -> Result<Json<GameView>, ApiError> {
    let config = GameConfig {
        board_size: req.board_size.unwrap_or(DEFAULT_BOARD_SIZE),
        seed: req.seed,
    };
    let game = config
        .new_game()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let ai = match config.seed {
        Some(seed) => GreedyAI::with_seed(seed.wrapping_add(1)),
        None => GreedyAI::new(),
    };

    let mut view = GameView::new(0, &game);
    let id = state.insert_game(GameSession::new(game, ai));
    view.id = id;

    tracing::info!("Started game {} (board size {})", id, config.board_size);

    Ok(Json(view))
}

/// Get the current state of a game
pub async fn get_game(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<Json<GameView>, ApiError> {
    view_of(&state, id).map(Json)
}

/// Drop a game session
pub async fn delete_game(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if state.remove_game(id) {
        tracing::info!("Deleted game {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(id))
    }
}

/// Submit the human (Player1) move, then let the computer reply.
///
/// A coordinate that is not a hex at all (off the cube plane, or out of
/// `i32` range) is rejected like any other illegal destination.
pub async fn make_player_move(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let to = match req.s {
        Some(s) => Hex::from_cube(req.q, req.r, s),
        None => Hex::try_new(req.q, req.r),
    };

    let (moved, reply) = {
        let mut games = state.games.write().unwrap();
        let session = games.get_mut(&id).ok_or_else(|| ApiError::not_found(id))?;

        let moved = match to {
            Some(to) => {
                let (next, moved) = session.state.submit_move(Player::Player1, to);
                session.state = next;
                moved
            }
            None => {
                tracing::debug!(
                    "Game {}: rejected malformed coordinate ({}, {}, {:?})",
                    id,
                    req.q,
                    req.r,
                    req.s
                );
                false
            }
        };

        let reply = moved && req.auto_reply && session.state.is_game_over().is_none();
        (moved, reply)
    };

    let computer_move = if reply {
        if !state.ai_delay.is_zero() {
            tokio::time::sleep(state.ai_delay).await;
        }
        apply_computer_move(&state, id, Some(Player::Player2))?
    } else {
        None
    };

    Ok(Json(MoveResponse {
        moved,
        computer_move,
        game: view_of(&state, id)?,
    }))
}

/// Let the computer move for whichever side is to play
pub async fn make_ai_move(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<Json<MoveResponse>, ApiError> {
    let computer_move = apply_computer_move(&state, id, None)?;

    Ok(Json(MoveResponse {
        moved: computer_move.is_some(),
        computer_move,
        game: view_of(&state, id)?,
    }))
}

// ============================================================================
// HELPERS
// ============================================================================

fn view_of(state: &ServerState, id: u64) -> Result<GameView, ApiError> {
    let games = state.games.read().unwrap();
    let session = games.get(&id).ok_or_else(|| ApiError::not_found(id))?;
    Ok(GameView::new(id, &session.state))
}

/// Choose and apply the computer's move for `side` (or the side to move).
///
/// `None` once the game is over, or when `side` is given and it is not that
/// player's turn any more.
fn apply_computer_move(
    state: &ServerState,
    id: u64,
    side: Option<Player>,
) -> Result<Option<MoveRecord>, ApiError> {
    let mut games = state.games.write().unwrap();
    let session = games.get_mut(&id).ok_or_else(|| ApiError::not_found(id))?;

    let player = session.state.current_player();
    if side.is_some_and(|side| side != player) {
        tracing::debug!("Game {}: {:?} already replied, skipping", id, side);
        return Ok(None);
    }

    let Some(to) = session.ai.choose_move(&session.state) else {
        return Ok(None);
    };

    let (next, moved) = session.state.submit_move(player, to);
    session.state = next;

    if moved {
        Ok(session.state.history().last().copied())
    } else {
        Err(ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "computer chose an illegal move".to_string(),
        })
    }
}
