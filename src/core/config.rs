//! Game configuration.
//!
//! The rules engine is configured once at setup. An invalid configuration is
//! rejected here so it can never surface in the middle of a match.

use serde::{Deserialize, Serialize};

use super::error::ArenaError;

/// Smallest supported board (needs room around the 2x2 centre).
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest supported board.
pub const MAX_BOARD_SIZE: usize = 16;

/// Standard Reversi board size.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width and height. Must be even.
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `board_size` x `board_size` board.
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Check the configuration.
    ///
    /// The board must be even-sized so the starting position is symmetric.
    pub fn validate(&self) -> Result<(), ArenaError> {
        let size = self.board_size;
        if size % 2 != 0 || !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ArenaError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_even_sizes_accepted() {
        for size in [4, 6, 8, 10, 16] {
            assert!(GameConfig::new(size).validate().is_ok(), "size {size}");
        }
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        for size in [0, 2, 3, 5, 7, 18] {
            let err = GameConfig::default().with_board_size(size).validate();
            assert!(
                matches!(err, Err(ArenaError::InvalidBoardSize { size: s, .. }) if s == size),
                "size {size}"
            );
        }
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
