//! Game configuration

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::ConfigError;
use crate::game::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest board that still has base tiles to fight over
pub const MIN_BOARD_SIZE: i32 = 1;

pub const MAX_BOARD_SIZE: i32 = 32;

/// Settings for starting a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board radius
    pub board_size: i32,
    /// Random seed for the board layout (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(mut self, board_size: i32) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize {
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
                got: self.board_size,
            });
        }
        Ok(())
    }

    /// Create RNG from seed or entropy
    pub fn create_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Validate and start a new game
    pub fn new_game(&self) -> Result<GameState, ConfigError> {
        self.validate()?;
        Ok(GameState::new_game(self.board_size, &mut self.create_rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_board_size_bounds() {
        assert!(GameConfig::default().with_board_size(0).validate().is_err());
        assert!(GameConfig::default().with_board_size(33).validate().is_err());
        assert!(GameConfig::default().with_board_size(1).validate().is_ok());
    }

    #[test]
    fn test_seeded_games_repeat() {
        let config = GameConfig::default().with_seed(42);
        let a = config.new_game().unwrap();
        let b = config.new_game().unwrap();
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/scorch.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
