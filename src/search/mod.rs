//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! Two-player, zero-sum search over a `RulesEngine`:
//!
//! - **Minimax**: exhaustive, exact utility at terminal states
//! - **Alpha-beta**: same result as minimax with pruning; optionally
//!   depth-limited with a heuristic `Evaluator` at the frontier
//!
//! Every search is a set of pure recursive functions. MAX nodes belong to
//! the side that started the search, MIN nodes to its opponent. The root
//! folds over `actions(state)` and keeps the first action with the best
//! value.
//!
//! ## Usage
//!
//! ```rust
//! use reversi_arena::games::reversi::{DiscWeightHeuristic, Reversi};
//! use reversi_arena::rules::RulesEngine;
//! use reversi_arena::search::{alphabeta, Horizon};
//!
//! let game = Reversi::default();
//! let state = game.initial_state();
//! let heuristic = DiscWeightHeuristic::default();
//!
//! let horizon = Horizon::Depth { depth: 2, evaluator: &heuristic };
//! let outcome = alphabeta::search(&game, &state, horizon)
//!     .expect("the opening position has legal moves");
//! assert!(game.actions(&state).contains(&outcome.action));
//! ```

pub mod alphabeta;
pub mod config;
pub mod evaluator;
pub mod minimax;
pub mod stats;

pub use alphabeta::Horizon;
pub use config::SearchConfig;
pub use evaluator::{Evaluation, Evaluator, INFINITY, NEG_INFINITY};
pub use stats::SearchStats;

use crate::core::Action;

/// Result of a search from one root position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The chosen action.
    pub action: Action,

    /// Value of the root under that action.
    pub value: Evaluation,

    /// Statistics for this search.
    pub stats: SearchStats,
}
