//! Alpha-beta search, exhaustive or depth-limited.
//!
//! Run exhaustively it returns the same root value (and the same action)
//! as `minimax::search`. With a `Horizon::Depth` it stops at the given
//! depth and scores the frontier with an `Evaluator`.

use std::time::Instant;

use crate::core::{GameState, PlayerId};
use crate::rules::RulesEngine;

use super::evaluator::{Evaluation, Evaluator, INFINITY, NEG_INFINITY};
use super::stats::SearchStats;
use super::SearchOutcome;

/// How far the search looks.
#[derive(Clone, Copy)]
pub enum Horizon<'a> {
    /// Search to terminal states; score them with exact utility.
    Exhaustive,
    /// Stop `depth` plies below the root's move and score the frontier,
    /// and any terminal state on the way, with `evaluator`.
    Depth {
        depth: u32,
        evaluator: &'a dyn Evaluator,
    },
}

/// Run an alpha-beta search for the side to move in `state`.
///
/// Returns `None` if that side has no legal action.
pub fn search<E: RulesEngine + ?Sized>(
    engine: &E,
    state: &GameState,
    horizon: Horizon<'_>,
) -> Option<SearchOutcome> {
    let start = Instant::now();
    let mut searcher = Searcher {
        engine,
        me: engine.player_at_turn(state),
        horizon,
        stats: SearchStats::new(),
    };
    let depth = match horizon {
        Horizon::Exhaustive => None,
        Horizon::Depth { depth, .. } => Some(depth),
    };

    let mut alpha = NEG_INFINITY;
    let mut best = None;

    for action in engine.actions(state) {
        let Ok(child) = engine.state_after_move(state, action) else {
            continue;
        };
        let value = searcher.min_value(&child, alpha, INFINITY, depth);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((action, value));
        }
        alpha = alpha.max(value);
    }

    let mut stats = searcher.stats;
    stats.time_us = start.elapsed().as_micros() as u64;
    best.map(|(action, value)| SearchOutcome { action, value, stats })
}

struct Searcher<'a, E: ?Sized> {
    engine: &'a E,
    me: PlayerId,
    horizon: Horizon<'a>,
    stats: SearchStats,
}

impl<E: RulesEngine + ?Sized> Searcher<'_, E> {
    /// Score a node that will not be expanded, or `None` to keep searching.
    fn leaf(
        &mut self,
        state: &GameState,
        depth: Option<u32>,
        maximizing: bool,
    ) -> Option<Evaluation> {
        let at_horizon = depth == Some(0);
        if !at_horizon && !self.engine.is_terminal(state) {
            return None;
        }

        self.stats.leaves += 1;
        let value = match self.horizon {
            Horizon::Exhaustive => self.engine.utility(state, self.me),
            Horizon::Depth { evaluator, .. } if maximizing => evaluator.evaluate(state, self.me),
            Horizon::Depth { evaluator, .. } => -evaluator.evaluate(state, self.me.other()),
        };
        Some(value)
    }

    fn max_value(
        &mut self,
        state: &GameState,
        mut alpha: Evaluation,
        beta: Evaluation,
        depth: Option<u32>,
    ) -> Evaluation {
        self.stats.nodes += 1;
        if let Some(value) = self.leaf(state, depth, true) {
            return value;
        }

        let child_depth = depth.map(|d| d - 1);
        let mut best = NEG_INFINITY;
        for action in self.engine.actions(state) {
            let Ok(child) = self.engine.state_after_move(state, action) else {
                continue;
            };
            best = best.max(self.min_value(&child, alpha, beta, child_depth));
            if best >= beta {
                self.stats.cutoffs += 1;
                return best;
            }
            alpha = alpha.max(best);
        }
        best
    }

    fn min_value(
        &mut self,
        state: &GameState,
        alpha: Evaluation,
        mut beta: Evaluation,
        depth: Option<u32>,
    ) -> Evaluation {
        self.stats.nodes += 1;
        if let Some(value) = self.leaf(state, depth, false) {
            return value;
        }

        let child_depth = depth.map(|d| d - 1);
        let mut best = INFINITY;
        for action in self.engine.actions(state) {
            let Ok(child) = self.engine.state_after_move(state, action) else {
                continue;
            };
            best = best.min(self.max_value(&child, alpha, beta, child_depth));
            if best <= alpha {
                self.stats.cutoffs += 1;
                return best;
            }
            beta = beta.min(best);
        }
        best
    }
}
