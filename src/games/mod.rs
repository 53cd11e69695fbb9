//! Concrete games implementing `RulesEngine`.

pub mod reversi;
