//! Error types

use crate::board::Hex;
use crate::game::Player;
use thiserror::Error;

/// Why a move request was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("not {got:?}'s turn, waiting on {expected:?}")]
    NotYourTurn { expected: Player, got: Player },
    #[error("{0:?} is not a legal destination")]
    IllegalDestination(Hex),
}

/// Hand-built board that cannot start a game
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("board holds no piece for {0:?}")]
    MissingPiece(Player),
    #[error("board holds more than one piece for {0:?}")]
    DuplicatePiece(Player),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("board size must be between {min} and {max}, got {got}")]
    BoardSize { min: i32, max: i32, got: i32 },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
