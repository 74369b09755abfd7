//! Scorch Core - Game engine and AI
//!
//! This crate provides the core game logic for Scorch, a two-player
//! scorched-earth capture game on a hexagonal board:
//! - Board geometry (hex grid with cube coordinates)
//! - Board state and the balanced random tile layout
//! - Straight-line move generation
//! - Turn transitions and terminal detection
//! - Greedy one-ply computer opponent

pub mod board;
pub mod tile;
pub mod state;
pub mod moves;
pub mod game;
pub mod ai;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use board::{Hex, DIRECTIONS, DEFAULT_BOARD_SIZE, iter_board, hex_count};
pub use tile::TileKind;
pub use state::{Board, generate_balanced_distribution, pole};
pub use moves::{is_valid_move, mobility, valid_moves};
pub use game::{GameState, GameResult, MoveRecord, Phase, Player, TileCounts};
pub use ai::{GreedyAI, computer_choose_move};
pub use config::GameConfig;
pub use error::{ConfigError, MoveError, SetupError};
