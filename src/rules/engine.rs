//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions produce the next state
//! - When the game ends and who won

use crate::core::{Action, ArenaError, GameState, PlayerId};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Build a result from a utility value seen from `player`'s side.
    #[must_use]
    pub fn from_utility(player: PlayerId, utility: i32) -> Self {
        match utility.signum() {
            1 => GameResult::Winner(player),
            -1 => GameResult::Winner(player.other()),
            _ => GameResult::Draw,
        }
    }
}

/// Rules engine trait.
///
/// The boundary consumed by search players and match drivers. All methods
/// are pure with respect to the states they receive: a state passed in is
/// never modified, new states are returned instead.
///
/// ## Implementation Notes
///
/// - `actions`: Return an empty vec if the mover cannot act
/// - `state_after_move`: Must be deterministic
/// - `utility`: Only defined on terminal states
pub trait RulesEngine {
    /// The starting position.
    fn initial_state(&self) -> GameState;

    /// Both sides, first mover first.
    fn players(&self) -> [PlayerId; 2] {
        PlayerId::BOTH
    }

    /// The side to move in `state`.
    fn player_at_turn(&self, state: &GameState) -> PlayerId {
        state.player_at_turn()
    }

    /// The opponent of `player`.
    fn other_player(&self, player: PlayerId) -> PlayerId {
        player.other()
    }

    /// All legal actions for the side to move, in a stable order.
    fn actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply `action`, returning the next state.
    ///
    /// Returns `ArenaError::IllegalMove` if the action is not legal.
    fn state_after_move(&self, state: &GameState, action: Action) -> Result<GameState, ArenaError>;

    /// Is the game over?
    fn is_terminal(&self, state: &GameState) -> bool {
        self.actions(state).is_empty()
    }

    /// Final score for `player`: `+1` win, `0` draw, `-1` loss.
    ///
    /// Callers must check `is_terminal` first.
    fn utility(&self, state: &GameState, player: PlayerId) -> i32;

    /// Render the state as text, optionally numbering empty cells.
    fn render_state(&self, state: &GameState, show_numbers: bool) -> String;

    // === Convenience Methods ===

    /// Print the rendered state to stdout.
    fn display_state(&self, state: &GameState, show_numbers: bool) {
        print!("{}", self.render_state(state, show_numbers));
    }

    /// Result of the game, `None` while it continues.
    fn result(&self, state: &GameState) -> Option<GameResult> {
        if !self.is_terminal(state) {
            return None;
        }
        let first = self.players()[0];
        Some(GameResult::from_utility(first, self.utility(state, first)))
    }
}
