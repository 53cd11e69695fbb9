//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions produce the next state
//! - Terminal detection and utility
//!
//! Search players and the match drivers call into `RulesEngine` and never
//! interpret game-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
