//! Core engine types: sides, state, actions, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by the rules engine,
//! the search players and the match drivers.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use action::{Action, ActionRecord};
pub use state::{Board, Cell, GameState};
pub use error::ArenaError;
