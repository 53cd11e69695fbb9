//! Reversi (Othello) on an even-sized square board.
//!
//! - Black (`B`) moves first from the standard four-disc centre
//! - A move places a disc that flanks at least one run of opponent discs
//!   in any of the eight directions; every flanked run is flipped
//! - The game ends as soon as the side to move has no legal move (no pass
//!   move exists); the side with more discs wins

mod game;
mod heuristic;

pub use game::Reversi;
pub use heuristic::DiscWeightHeuristic;
