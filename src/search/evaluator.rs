//! Static evaluation used to cut search off before the end of the game.

use crate::core::{GameState, PlayerId};

/// Search value. Exact utilities are `-1`, `0` or `+1`; heuristic scores
/// use the same scale but are unbounded.
pub type Evaluation = i32;

/// Larger than any reachable evaluation.
pub const INFINITY: Evaluation = i32::MAX;

/// Smaller than any reachable evaluation. Negating it cannot overflow.
pub const NEG_INFINITY: Evaluation = -i32::MAX;

/// Heuristic evaluator.
///
/// Scores a position from `player`'s own point of view: higher is better for
/// `player`. The search negates the score when it evaluates the opponent.
pub trait Evaluator: Send + Sync {
    /// Score `state` for `player`.
    fn evaluate(&self, state: &GameState, player: PlayerId) -> Evaluation;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, state: &GameState, player: PlayerId) -> Evaluation {
        (**self).evaluate(state, player)
    }
}
