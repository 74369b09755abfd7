//! Move generation: unobstructed straight-line slides along the six hex directions
//!
//! A piece slides any distance over base tiles. Each ray stops at the board
//! edge or at the first non-base tile (an empty hex or either piece), which can
//! be neither crossed nor landed on.

use crate::board::{Hex, DIRECTIONS};
use crate::state::Board;
use crate::tile::TileKind;
use std::iter;

/// Hexes reachable from `from` along one direction, nearest first
fn ray(board: &Board, from: Hex, dir: Hex) -> impl Iterator<Item = Hex> + '_ {
    iter::successors(Some(from + dir), move |&hex| Some(hex + dir))
        .take_while(move |&hex| board.get(hex).is_some_and(TileKind::is_passable))
}

/// Check whether a piece on `from` may move to `to`
pub fn is_valid_move(board: &Board, from: Hex, to: Hex) -> bool {
    if !board.get(to).is_some_and(TileKind::is_passable) {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&dir| ray(board, from, dir).any(|hex| hex == to))
}

/// All landing hexes for a piece on `from`, grouped by direction in [`DIRECTIONS`] order.
///
/// Rays from one origin never overlap, so the result holds no duplicates.
pub fn valid_moves(board: &Board, from: Hex) -> Vec<Hex> {
    DIRECTIONS
        .iter()
        .flat_map(|&dir| ray(board, from, dir))
        .collect()
}

/// Number of landing hexes from `from`
pub fn mobility(board: &Board, from: Hex) -> usize {
    DIRECTIONS
        .iter()
        .map(|&dir| ray(board, from, dir).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::iter_board;

    /// Radius-1 board with fixed bases around the center
    fn small_board() -> Board {
        let mut board = Board::filled(1, TileKind::Player2Base);
        board.set(Hex::origin(), TileKind::Empty);
        board.set(Hex::new(0, -1), TileKind::Player1Piece);
        board.set(Hex::new(0, 1), TileKind::Player2Piece);
        board.set(Hex::new(1, -1), TileKind::Player1Base);
        board
    }

    #[test]
    fn test_small_board_moves_from_player1_pole() {
        let board = small_board();
        let mut moves = valid_moves(&board, Hex::new(0, -1));
        moves.sort();
        let mut expected = vec![Hex::new(1, -1), Hex::new(-1, 0)];
        expected.sort();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_slide_is_unbounded_until_blocked() {
        let mut board = Board::filled(3, TileKind::Player1Base);
        board.set(Hex::new(-3, 0), TileKind::Player2Piece);
        board.set(Hex::new(3, -3), TileKind::Empty);

        let from = Hex::new(-3, 0);
        let moves = valid_moves(&board, from);
        // Toward the right: (-2,-1), (-1,-2), (0,-3), then off board
        assert!(moves.contains(&Hex::new(-2, -1)));
        assert!(moves.contains(&Hex::new(0, -3)));
        // Along bottom-right: (-2,0) ... (3,0)
        assert!(moves.contains(&Hex::new(3, 0)));
        assert_eq!(mobility(&board, from), moves.len());
    }

    #[test]
    fn test_cannot_jump_over_empty_or_piece() {
        let mut board = Board::filled(3, TileKind::Player2Base);
        let from = Hex::new(-3, 0);
        board.set(from, TileKind::Player1Piece);
        board.set(Hex::new(-1, 0), TileKind::Empty);
        board.set(Hex::new(-3, 2), TileKind::Player2Piece);

        assert!(is_valid_move(&board, from, Hex::new(-2, 0)));
        assert!(!is_valid_move(&board, from, Hex::new(0, 0)));
        assert!(!is_valid_move(&board, from, Hex::new(-3, 3)));
        assert!(!is_valid_move(&board, from, Hex::new(-3, 2)));
    }

    #[test]
    fn test_never_lands_on_non_base() {
        let board = small_board();
        let from = Hex::new(0, -1);
        assert!(!is_valid_move(&board, from, Hex::origin()));
        assert!(!is_valid_move(&board, from, Hex::new(0, 1)));
        assert!(!is_valid_move(&board, from, from));
        assert!(!is_valid_move(&board, from, Hex::new(4, -4)));
    }

    #[test]
    fn test_off_line_target_rejected() {
        let board = Board::filled(3, TileKind::Player1Base);
        // Two steps away, but not along a single direction
        assert!(!is_valid_move(&board, Hex::origin(), Hex::new(1, 1)));
        assert!(is_valid_move(&board, Hex::origin(), Hex::new(2, 0)));
    }

    #[test]
    fn test_is_valid_move_agrees_with_valid_moves() {
        let board = small_board();
        for from in iter_board(1) {
            let moves = valid_moves(&board, from);
            for to in iter_board(1) {
                assert_eq!(is_valid_move(&board, from, to), moves.contains(&to));
            }
        }
    }
}
