//! Greedy one-ply computer opponent
//!
//! Every legal destination is scored and the highest score wins:
//! - landing on enemy territory is worth [`CAPTURE_BONUS`]
//! - standing on enemy territory before the move adds [`VACATE_BONUS`]
//! - a uniform jitter in `[0, JITTER)` breaks ties
//!
//! No lookahead and no model of the reply.

use crate::board::Hex;
use crate::game::{GameState, Player};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Landing on an enemy base tile
pub const CAPTURE_BONUS: f32 = 10.0;

/// Leaving an enemy base tile (scorching it)
pub const VACATE_BONUS: f32 = 20.0;

/// Upper bound (exclusive) of the random tie-break
pub const JITTER: f32 = 3.0;

// ============================================================================
// GREEDY AI
// ============================================================================

/// Greedy AI player with its own random stream
pub struct GreedyAI {
    rng: ChaCha8Rng,
}

impl GreedyAI {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick a destination for the player to move
    pub fn choose_move(&mut self, state: &GameState) -> Option<Hex> {
        computer_choose_move(state, &mut self.rng)
    }
}

impl Default for GreedyAI {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic part of a move's score for `mover`
pub fn score_move(state: &GameState, mover: Player, to: Hex) -> f32 {
    let enemy_base = mover.opponent().base();
    let mut score = 0.0;

    if state.board().get(to) == Some(enemy_base) {
        score += CAPTURE_BONUS;
    }

    if state.ground(mover) == Some(enemy_base) {
        score += VACATE_BONUS;
    }

    score
}

/// Choose the best-scoring legal move for the player to move.
///
/// Returns `None` when the game is over. Ties after jitter keep the first
/// candidate in move-generation order.
pub fn computer_choose_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<Hex> {
    if state.is_game_over().is_some() {
        return None;
    }

    let mover = state.current_player();
    let mut best: Option<(Hex, f32)> = None;

    for &to in state.legal_moves() {
        let score = score_move(state, mover, to) + rng.gen_range(0.0..JITTER);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((to, score));
        }
    }

    best.map(|(to, _)| to)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Board;
    use crate::tile::TileKind;

    /// Player2 to move with exactly one capture among several options
    fn single_capture_position() -> GameState {
        let mut board = Board::filled(3, TileKind::Player2Base);
        board.set(Hex::origin(), TileKind::Empty);
        board.set(Hex::new(0, -3), TileKind::Player1Piece);
        board.set(Hex::new(0, 3), TileKind::Player2Piece);
        board.set(Hex::new(3, 0), TileKind::Player1Base);

        let mut game = GameState::from_board(board).unwrap();
        game.try_move(Player::Player1, Hex::new(1, -3)).unwrap();
        game
    }

    #[test]
    fn test_capture_always_chosen() {
        let game = single_capture_position();
        assert_eq!(game.current_player(), Player::Player2);
        assert!(game.legal_moves().contains(&Hex::new(3, 0)));
        assert!(game.legal_moves().len() > 1);

        for seed in 0..200 {
            let mut ai = GreedyAI::with_seed(seed);
            assert_eq!(ai.choose_move(&game), Some(Hex::new(3, 0)));
        }
    }

    #[test]
    fn test_score_move() {
        let game = single_capture_position();
        assert_eq!(score_move(&game, Player::Player2, Hex::new(3, 0)), CAPTURE_BONUS);
        assert_eq!(score_move(&game, Player::Player2, Hex::new(1, 2)), 0.0);
    }

    #[test]
    fn test_vacate_bonus_applies_on_enemy_ground() {
        let mut game = single_capture_position();
        game.try_move(Player::Player2, Hex::new(3, 0)).unwrap();
        game.try_move(Player::Player1, Hex::new(2, -3)).unwrap();
        assert_eq!(game.ground(Player::Player2), Some(TileKind::Player1Base));
        let to = game.legal_moves()[0];
        assert!(score_move(&game, Player::Player2, to) >= VACATE_BONUS);
    }

    #[test]
    fn test_choice_is_always_legal() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let game = GameState::new_game(5, &mut rng);
        let mut ai = GreedyAI::with_seed(5);
        let mv = ai.choose_move(&game).unwrap();
        assert!(game.legal_moves().contains(&mv));
    }

    #[test]
    fn test_no_move_when_game_over() {
        let mut board = Board::filled(1, TileKind::Empty);
        board.set(Hex::new(0, -1), TileKind::Player1Piece);
        board.set(Hex::new(0, 1), TileKind::Player2Piece);
        let game = GameState::from_board(board).unwrap();
        let mut ai = GreedyAI::with_seed(1);
        assert_eq!(ai.choose_move(&game), None);
    }
}
