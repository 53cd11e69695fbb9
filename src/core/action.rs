//! Action representation: a numeric cell code.
//!
//! Every move in Reversi places a disc on one empty cell, so an action is
//! just that cell's code `row * width + col`. The inverse mapping is a
//! div/mod by the board width.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A single move: the code of the target cell.
///
/// ## Example
///
/// ```
/// use reversi_arena::core::Action;
///
/// let action = Action::from_rc(2, 3, 8);
/// assert_eq!(action.code(), 19);
/// assert_eq!(action.to_rc(8), (2, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action(pub u16);

impl Action {
    /// Create an action from a raw cell code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Create an action from a row/column pair on a board `width` cells wide.
    #[must_use]
    pub fn from_rc(row: usize, col: usize, width: usize) -> Self {
        Self((row * width + col) as u16)
    }

    /// Get the raw cell code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Split the code into `(row, col)` for a board `width` cells wide.
    #[must_use]
    pub fn to_rc(self, width: usize) -> (usize, usize) {
        let code = self.0 as usize;
        (code / width, code % width)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded move with metadata for match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that made the move.
    pub player: PlayerId,

    /// The move made.
    pub action: Action,

    /// Ply number within the match (starts at 0).
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}
