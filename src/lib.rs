//! # reversi-arena
//!
//! A Reversi rules engine, adversarial search players and a timed
//! match/tournament driver.
//!
//! ## Design Principles
//!
//! 1. **Engine as a boundary**: search and drivers only see the
//!    `RulesEngine` trait. States are immutable values; every move returns
//!    a new state.
//!
//! 2. **Forfeits are results, not errors**: a player that runs over its
//!    time budget or plays an illegal move loses the match. `Err` is kept
//!    for contract violations and I/O failures.
//!
//! 3. **Configuration over constants**: board size, time limit, search
//!    depth and heuristic weights are all explicit config values.
//!
//! ## Modules
//!
//! - `core`: sides, board, state, actions, RNG, configuration, errors
//! - `rules`: `RulesEngine` trait and `GameResult`
//! - `games`: the Reversi implementation and its heuristic
//! - `search`: minimax and alpha-beta, exhaustive or depth-limited
//! - `players`: the `Player` trait and its implementations
//! - `arena`: match runner, tournament and file configuration

pub mod core;
pub mod rules;
pub mod games;
pub mod search;
pub mod players;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameConfig,
    Action, ActionRecord,
    Board, Cell, GameState,
    ArenaError,
};

pub use crate::rules::{RulesEngine, GameResult};

pub use crate::games::reversi::{Reversi, DiscWeightHeuristic};

pub use crate::search::{
    Evaluation, Evaluator, Horizon,
    SearchConfig, SearchOutcome, SearchStats,
};

pub use crate::players::{
    Player, PlayerKind,
    RandomPlayer, InteractivePlayer,
    MinimaxPlayer, AlphaBetaPlayer, HeuristicAlphaBetaPlayer,
};

pub use crate::arena::{
    ArenaConfig, MatchConfig, TournamentConfig,
    MatchRunner, MatchOutcome, Termination,
    Tournament, TournamentStats, Record, GameSummary,
};
