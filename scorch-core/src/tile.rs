//! Tile kinds

use crate::game::Player;
use serde::{Deserialize, Serialize};

/// What occupies a single hex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileKind {
    /// Removed from play (or the center)
    Empty,
    Player1Base,
    Player2Base,
    Player1Piece,
    Player2Piece,
}

impl TileKind {
    pub fn is_base(self) -> bool {
        matches!(self, TileKind::Player1Base | TileKind::Player2Base)
    }

    pub fn is_piece(self) -> bool {
        matches!(self, TileKind::Player1Piece | TileKind::Player2Piece)
    }

    /// A piece may slide over and land on base tiles only
    pub fn is_passable(self) -> bool {
        self.is_base()
    }

    /// Player owning this base tile or piece
    pub fn owner(self) -> Option<Player> {
        match self {
            TileKind::Player1Base | TileKind::Player1Piece => Some(Player::Player1),
            TileKind::Player2Base | TileKind::Player2Piece => Some(Player::Player2),
            TileKind::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_bases_are_passable() {
        assert!(TileKind::Player1Base.is_passable());
        assert!(TileKind::Player2Base.is_passable());
        assert!(!TileKind::Empty.is_passable());
        assert!(!TileKind::Player1Piece.is_passable());
        assert!(!TileKind::Player2Piece.is_passable());
    }

    #[test]
    fn test_owner() {
        assert_eq!(TileKind::Player1Base.owner(), Some(Player::Player1));
        assert_eq!(TileKind::Player2Piece.owner(), Some(Player::Player2));
        assert_eq!(TileKind::Empty.owner(), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TileKind::Player1Base).unwrap();
        assert_eq!(json, "\"player1Base\"");
        let kind: TileKind = serde_json::from_str("\"player2Piece\"").unwrap();
        assert_eq!(kind, TileKind::Player2Piece);
    }
}
