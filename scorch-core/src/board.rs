//! Hex board geometry with cube coordinates

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Board radius used by the standard game (distance from center to edge)
pub const DEFAULT_BOARD_SIZE: i32 = 5;

/// Cube hex coordinates. Invariant: `q + r + s == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl Hex {
    /// Build from the two axial components; `s` is derived.
    ///
    /// Overflows for components near the `i32` limits; use [`Hex::try_new`]
    /// for coordinates that come from outside the engine.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Checked form of [`Hex::new`]: `None` when `s` does not fit in an `i32`
    pub fn try_new(q: i32, r: i32) -> Option<Self> {
        let s = q.checked_neg()?.checked_sub(r)?;
        Some(Self { q, r, s })
    }

    /// Build from all three cube components, rejecting triples off the `q + r + s = 0` plane.
    pub fn from_cube(q: i32, r: i32, s: i32) -> Option<Self> {
        let hex = Self { q, r, s };
        hex.is_cube().then_some(hex)
    }

    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// True when the cube invariant holds (always, unless built by hand or deserialized)
    pub fn is_cube(&self) -> bool {
        i64::from(self.q) + i64::from(self.r) + i64::from(self.s) == 0
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, other: Hex) -> Hex {
        Hex {
            q: self.q + other.q,
            r: self.r + other.r,
            s: self.s + other.s,
        }
    }
}

/// The six straight-line directions, in scan order.
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new(1, -1),  // right
    Hex::new(1, 0),   // bottom right
    Hex::new(0, 1),   // bottom left
    Hex::new(-1, 1),  // left
    Hex::new(-1, 0),  // top left
    Hex::new(0, -1),  // top right
];

/// Every hex of a board with the given radius, column by column
pub fn iter_board(board_size: i32) -> impl Iterator<Item = Hex> {
    (-board_size..=board_size).flat_map(move |q| {
        let r1 = (-board_size).max(-q - board_size);
        let r2 = board_size.min(-q + board_size);
        (r1..=r2).map(move |r| Hex::new(q, r))
    })
}

/// Number of hexes on a board of the given radius
pub fn hex_count(board_size: i32) -> usize {
    let n = board_size.max(0) as usize;
    3 * n * n + 3 * n + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_unit_cube_vectors() {
        for dir in DIRECTIONS {
            assert!(dir.is_cube());
            assert_eq!(distance_to_center(dir), 1);
        }
        assert_eq!(DIRECTIONS[0], Hex { q: 1, r: -1, s: 0 });
        assert_eq!(DIRECTIONS[5], Hex { q: 0, r: -1, s: 1 });
    }

    fn distance_to_center(hex: Hex) -> i32 {
        (hex.q.abs() + hex.r.abs() + hex.s.abs()) / 2
    }

    #[test]
    fn test_add() {
        let hex = Hex::new(2, -1);
        assert_eq!(hex + DIRECTIONS[1], Hex::new(3, -1));
        assert_eq!(hex + DIRECTIONS[3], Hex::new(1, 0));
    }

    #[test]
    fn test_from_cube() {
        assert_eq!(Hex::from_cube(0, -5, 5), Some(Hex::new(0, -5)));
        assert_eq!(Hex::from_cube(1, 1, 1), None);
    }

    #[test]
    fn test_extreme_components_do_not_overflow() {
        assert_eq!(Hex::try_new(i32::MIN, 0), None);
        assert_eq!(
            Hex::try_new(i32::MAX, -1),
            Some(Hex { q: i32::MAX, r: -1, s: 1 - i32::MAX })
        );
        assert_eq!(Hex::try_new(-1, i32::MIN), None);
        assert_eq!(Hex::try_new(3, -1), Some(Hex::new(3, -1)));

        assert_eq!(Hex::from_cube(i32::MIN, i32::MIN, 0), None);
        assert_eq!(Hex::from_cube(i32::MAX, i32::MAX, i32::MAX), None);
        assert_eq!(
            Hex::from_cube(i32::MIN, i32::MAX, 1),
            Some(Hex { q: i32::MIN, r: i32::MAX, s: 1 })
        );
    }

    #[test]
    fn test_iter_board_size_one() {
        let mut hexes: Vec<_> = iter_board(1).collect();
        hexes.sort();
        let mut expected = vec![
            Hex::new(0, 0),
            Hex::new(0, -1),
            Hex::new(0, 1),
            Hex::new(1, -1),
            Hex::new(1, 0),
            Hex::new(-1, 1),
            Hex::new(-1, 0),
        ];
        expected.sort();
        assert_eq!(hexes, expected);
    }

    #[test]
    fn test_hex_count_matches_iteration() {
        for size in 0..=7 {
            assert_eq!(iter_board(size).count(), hex_count(size));
            assert!(iter_board(size).all(|h| h.is_cube() && distance_to_center(h) <= size));
        }
        assert_eq!(hex_count(5), 91);
    }
}
