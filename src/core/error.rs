//! Error type shared by the rules engine, players, and drivers.

use super::action::Action;
use super::player::PlayerId;

/// Errors surfaced by the arena.
///
/// Illegal moves and time-limit violations during a match are *not* errors:
/// the match runner turns them into forfeits. `IllegalMove` is only seen by
/// callers that use the rules engine directly.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("board size must be an even number between {min} and {max}, got {size}")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("{player} has no legal moves")]
    NoLegalMoves { player: PlayerId },

    #[error("action {action} is not legal for {player}")]
    IllegalMove { action: Action, player: PlayerId },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
