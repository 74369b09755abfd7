//! Board state: hex -> tile kind, plus the balanced random layout

use crate::board::{iter_board, Hex};
use crate::game::Player;
use crate::tile::TileKind;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;

/// Starting hex of a player's piece: Player1 at the top pole, Player2 at the bottom
pub fn pole(player: Player, board_size: i32) -> Hex {
    match player {
        Player::Player1 => Hex::new(0, -board_size),
        Player::Player2 => Hex::new(0, board_size),
    }
}

/// Center plus both poles never receive a base tile
fn is_reserved(hex: Hex, board_size: i32) -> bool {
    hex == Hex::origin()
        || hex == pole(Player::Player1, board_size)
        || hex == pole(Player::Player2, board_size)
}

/// Assign base tiles to every non-reserved hex.
///
/// With `n` candidate hexes, exactly `n / 2` become Player1Base and the rest
/// Player2Base. Which hexes get which is uniformly random.
pub fn generate_balanced_distribution<R: Rng + ?Sized>(
    board_size: i32,
    rng: &mut R,
) -> FxHashMap<Hex, TileKind> {
    let mut positions: Vec<Hex> = iter_board(board_size)
        .filter(|&hex| !is_reserved(hex, board_size))
        .collect();

    let player1_count = positions.len() / 2;

    let mut distribution: FxHashMap<Hex, TileKind> = positions
        .iter()
        .map(|&hex| (hex, TileKind::Player2Base))
        .collect();

    positions.shuffle(rng);
    for hex in &positions[..player1_count] {
        distribution.insert(*hex, TileKind::Player1Base);
    }

    distribution
}

/// Board: hex -> tile (dense over a fixed set of hexes)
///
/// The key set is fixed at construction; only values change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    size: i32,
    tiles: FxHashMap<Hex, TileKind>,
}

impl Board {
    /// Build a fresh randomized board of the given radius
    pub fn build<R: Rng + ?Sized>(board_size: i32, rng: &mut R) -> Self {
        let distribution = generate_balanced_distribution(board_size, rng);
        Self::from_distribution(board_size, &distribution)
    }

    /// Build a board using a precomputed base distribution.
    /// Non-reserved hexes missing from `distribution` default to Player1Base.
    pub fn from_distribution(board_size: i32, distribution: &FxHashMap<Hex, TileKind>) -> Self {
        let tiles = iter_board(board_size)
            .map(|hex| {
                let kind = if hex == Hex::origin() {
                    TileKind::Empty
                } else if hex == pole(Player::Player1, board_size) {
                    TileKind::Player1Piece
                } else if hex == pole(Player::Player2, board_size) {
                    TileKind::Player2Piece
                } else {
                    distribution
                        .get(&hex)
                        .copied()
                        .unwrap_or(TileKind::Player1Base)
                };
                (hex, kind)
            })
            .collect();

        Self {
            size: board_size,
            tiles,
        }
    }

    /// Board with every hex set to `kind`; used to lay out hand-made positions
    pub fn filled(board_size: i32, kind: TileKind) -> Self {
        Self {
            size: board_size,
            tiles: iter_board(board_size).map(|hex| (hex, kind)).collect(),
        }
    }

    /// Board radius
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Tile at hex, `None` if off the board
    pub fn get(&self, hex: Hex) -> Option<TileKind> {
        self.tiles.get(&hex).copied()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.tiles.contains_key(&hex)
    }

    /// Overwrite the tile at hex, returning the previous kind.
    /// Off-board hexes are ignored (returns `None`) so the key set never grows.
    pub fn set(&mut self, hex: Hex, kind: TileKind) -> Option<TileKind> {
        self.tiles
            .get_mut(&hex)
            .map(|slot| std::mem::replace(slot, kind))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate tiles (arbitrary order)
    pub fn tiles(&self) -> impl Iterator<Item = (Hex, TileKind)> + '_ {
        self.tiles.iter().map(|(&hex, &kind)| (hex, kind))
    }

    /// Count hexes holding `kind`
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.values().filter(|&&k| k == kind).count()
    }

    /// Hexes holding `kind`
    pub fn find(&self, kind: TileKind) -> Vec<Hex> {
        self.tiles
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(&hex, _)| hex)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hex_count;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_distribution_is_balanced() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let dist = generate_balanced_distribution(5, &mut rng);
        let n = hex_count(5) - 3;
        assert_eq!(dist.len(), n);
        let p1 = dist.values().filter(|&&k| k == TileKind::Player1Base).count();
        let p2 = dist.values().filter(|&&k| k == TileKind::Player2Base).count();
        assert_eq!(p1, n / 2);
        assert_eq!(p2, n - n / 2);
    }

    #[test]
    fn test_distribution_skips_reserved() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for size in 1..=6 {
            let dist = generate_balanced_distribution(size, &mut rng);
            assert!(!dist.contains_key(&Hex::origin()));
            assert!(!dist.contains_key(&pole(Player::Player1, size)));
            assert!(!dist.contains_key(&pole(Player::Player2, size)));
        }
    }

    #[test]
    fn test_distribution_varies_between_calls() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let a = generate_balanced_distribution(5, &mut rng);
        let b = generate_balanced_distribution(5, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_build_places_reserved_tiles() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let board = Board::build(5, &mut rng);
        assert_eq!(board.len(), 91);
        assert_eq!(board.get(Hex::origin()), Some(TileKind::Empty));
        assert_eq!(board.get(Hex::new(0, -5)), Some(TileKind::Player1Piece));
        assert_eq!(board.get(Hex::new(0, 5)), Some(TileKind::Player2Piece));
        assert_eq!(board.count(TileKind::Empty), 1);
        assert_eq!(board.count(TileKind::Player1Base), 44);
        assert_eq!(board.count(TileKind::Player2Base), 44);
    }

    #[test]
    fn test_from_distribution_defaults_to_player1_base() {
        let board = Board::from_distribution(1, &FxHashMap::default());
        assert_eq!(board.count(TileKind::Player1Base), 4);
        assert_eq!(board.count(TileKind::Player2Base), 0);
    }

    #[test]
    fn test_set_never_adds_keys() {
        let mut board = Board::filled(1, TileKind::Player2Base);
        assert_eq!(board.set(Hex::new(5, 0), TileKind::Empty), None);
        assert_eq!(board.len(), 7);
        assert_eq!(
            board.set(Hex::new(1, 0), TileKind::Empty),
            Some(TileKind::Player2Base)
        );
        assert_eq!(board.get(Hex::new(1, 0)), Some(TileKind::Empty));
    }
}
