//! Match and tournament drivers.
//!
//! - `MatchRunner`: one match, per-move time limit, forfeits
//! - `Tournament`: `n` matches with alternating seats and aggregated results
//! - `ArenaConfig`: file-level settings for the command-line runner

pub mod config;
pub mod match_runner;
pub mod tournament;

pub use config::{ArenaConfig, MatchConfig, TournamentConfig};
pub use match_runner::{MatchOutcome, MatchRunner, Termination};
pub use tournament::{GameSummary, Record, Tournament, TournamentStats};
