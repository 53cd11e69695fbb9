//! Exhaustive minimax search.
//!
//! Searches every line to a terminal state and scores it with the exact
//! utility for the side that started the search. No depth limit and no
//! heuristic: only practical when the remaining game is small.

use std::time::Instant;

use crate::core::{GameState, PlayerId};
use crate::rules::RulesEngine;

use super::evaluator::{Evaluation, INFINITY, NEG_INFINITY};
use super::stats::SearchStats;
use super::SearchOutcome;

/// Run a full minimax search for the side to move in `state`.
///
/// Returns `None` if that side has no legal action. Ties go to the first
/// action, in `actions` order, that reached the best value.
pub fn search<E: RulesEngine + ?Sized>(engine: &E, state: &GameState) -> Option<SearchOutcome> {
    let start = Instant::now();
    let me = engine.player_at_turn(state);
    let mut stats = SearchStats::new();
    let mut best = None;

    for action in engine.actions(state) {
        let Ok(child) = engine.state_after_move(state, action) else {
            continue;
        };
        let value = min_value(engine, &child, me, &mut stats);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((action, value));
        }
    }

    stats.time_us = start.elapsed().as_micros() as u64;
    best.map(|(action, value)| SearchOutcome { action, value, stats })
}

fn max_value<E: RulesEngine + ?Sized>(
    engine: &E,
    state: &GameState,
    me: PlayerId,
    stats: &mut SearchStats,
) -> Evaluation {
    stats.nodes += 1;
    if engine.is_terminal(state) {
        stats.leaves += 1;
        return engine.utility(state, me);
    }

    let mut best = NEG_INFINITY;
    for action in engine.actions(state) {
        if let Ok(child) = engine.state_after_move(state, action) {
            best = best.max(min_value(engine, &child, me, stats));
        }
    }
    best
}

fn min_value<E: RulesEngine + ?Sized>(
    engine: &E,
    state: &GameState,
    me: PlayerId,
    stats: &mut SearchStats,
) -> Evaluation {
    stats.nodes += 1;
    if engine.is_terminal(state) {
        stats.leaves += 1;
        return engine.utility(state, me);
    }

    let mut best = INFINITY;
    for action in engine.actions(state) {
        if let Ok(child) = engine.state_after_move(state, action) {
            best = best.min(max_value(engine, &child, me, stats));
        }
    }
    best
}
