//! One timed match between two players.
//!
//! Seat `i` plays side `PlayerId::new(i)`; seat 0 moves first. Every
//! `choose_move` call is timed with a wall-clock measurement around the
//! synchronous call. A slow search is never interrupted: the limit is
//! checked once the call returns, and an unwaived seat that went over
//! forfeits. So does a seat that returns an illegal action.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::core::{Action, ActionRecord, ArenaError, PlayerId};
use crate::players::Player;
use crate::rules::{GameResult, RulesEngine};

use super::config::MatchConfig;

/// Why a match ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Played to a terminal state.
    Completed,
    /// `seat` took `elapsed` for one move, over `limit`.
    TimeLimitExceeded {
        seat: usize,
        elapsed: Duration,
        limit: Duration,
    },
    /// `seat` returned an action the rules reject.
    IllegalMove { seat: usize, action: Action },
}

impl Termination {
    /// Did a seat lose by forfeit?
    #[must_use]
    pub fn is_forfeit(&self) -> bool {
        !matches!(self, Termination::Completed)
    }
}

/// Result of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Winner by side, or a draw.
    pub result: GameResult,

    /// How the match ended.
    pub termination: Termination,

    /// Every applied move, in order.
    pub moves: Vec<ActionRecord>,
}

impl MatchOutcome {
    /// Winning seat, `None` for a draw.
    #[must_use]
    pub fn winner_index(&self) -> Option<usize> {
        match self.result {
            GameResult::Winner(player) => Some(player.index()),
            GameResult::Draw => None,
        }
    }
}

/// Plays matches of one game.
pub struct MatchRunner<E: RulesEngine> {
    engine: E,
    config: MatchConfig,
}

impl<E: RulesEngine> MatchRunner<E> {
    pub fn new(engine: E, config: MatchConfig) -> Self {
        Self { engine, config }
    }

    /// Play one match from the initial state.
    ///
    /// `waivers[i]` exempts seat `i` from the time limit. Errors returned
    /// by a player abort the match and are passed through.
    pub fn play(
        &self,
        mut players: [&mut dyn Player; 2],
        waivers: [bool; 2],
    ) -> Result<MatchOutcome, ArenaError> {
        let engine = &self.engine;
        let limit = self.config.time_limit;
        let mut state = engine.initial_state();
        let mut moves = Vec::new();

        if self.config.show_moves {
            engine.display_state(&state, false);
        }

        loop {
            if let Some(result) = engine.result(&state) {
                info!(?result, plies = moves.len(), "match finished");
                return Ok(MatchOutcome {
                    result,
                    termination: Termination::Completed,
                    moves,
                });
            }

            let mover = engine.player_at_turn(&state);
            let seat = mover.index();

            let start = Instant::now();
            let action = players[seat].choose_move(engine, &state)?;
            let elapsed = start.elapsed();

            if elapsed > limit && !waivers[seat] {
                warn!(
                    player = %mover,
                    elapsed_ms = elapsed.as_millis() as u64,
                    limit_ms = limit.as_millis() as u64,
                    "time limit exceeded, forfeit"
                );
                return Ok(forfeit(
                    mover,
                    Termination::TimeLimitExceeded { seat, elapsed, limit },
                    moves,
                ));
            }

            state = match engine.state_after_move(&state, action) {
                Ok(next) => next,
                Err(ArenaError::IllegalMove { .. }) => {
                    warn!(player = %mover, action = %action, "illegal move, forfeit");
                    return Ok(forfeit(mover, Termination::IllegalMove { seat, action }, moves));
                }
                Err(e) => return Err(e),
            };

            debug!(
                player = %mover,
                action = %action,
                elapsed_us = elapsed.as_micros() as u64,
                "move applied"
            );
            moves.push(ActionRecord::new(mover, action, moves.len() as u32));

            if self.config.show_moves {
                engine.display_state(&state, false);
            }
        }
    }
}

fn forfeit(loser: PlayerId, termination: Termination, moves: Vec<ActionRecord>) -> MatchOutcome {
    MatchOutcome {
        result: GameResult::Winner(loser.other()),
        termination,
        moves,
    }
}
