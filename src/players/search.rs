//! Players backed by the search algorithms.
//!
//! Each keeps the statistics of its most recent search and logs them at
//! debug level.

use tracing::debug;

use crate::core::{Action, ArenaError, GameState};
use crate::games::reversi::DiscWeightHeuristic;
use crate::rules::RulesEngine;
use crate::search::{
    alphabeta, minimax, Evaluator, Horizon, SearchConfig, SearchOutcome, SearchStats,
};

/// Unwrap a search outcome, recording and logging its statistics.
fn finish(
    name: &str,
    engine: &dyn RulesEngine,
    state: &GameState,
    outcome: Option<SearchOutcome>,
    last_stats: &mut SearchStats,
) -> Result<Action, ArenaError> {
    let Some(outcome) = outcome else {
        return Err(ArenaError::NoLegalMoves {
            player: engine.player_at_turn(state),
        });
    };

    debug!(
        player = name,
        action = %outcome.action,
        value = outcome.value,
        nodes = outcome.stats.nodes,
        leaves = outcome.stats.leaves,
        cutoffs = outcome.stats.cutoffs,
        time_us = outcome.stats.time_us,
        nps = outcome.stats.nodes_per_second(),
        "search finished"
    );
    *last_stats = outcome.stats;
    Ok(outcome.action)
}

/// Exhaustive minimax to the end of the game.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPlayer {
    last_stats: SearchStats,
}

impl MinimaxPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }
}

impl super::Player for MinimaxPlayer {
    fn name(&self) -> String {
        "Minimax".to_string()
    }

    fn choose_move(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
    ) -> Result<Action, ArenaError> {
        let outcome = minimax::search(engine, state);
        finish("Minimax", engine, state, outcome, &mut self.last_stats)
    }
}

/// Exhaustive alpha-beta. Picks the same move as `MinimaxPlayer`.
#[derive(Clone, Debug, Default)]
pub struct AlphaBetaPlayer {
    last_stats: SearchStats,
}

impl AlphaBetaPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }
}

impl super::Player for AlphaBetaPlayer {
    fn name(&self) -> String {
        "AlphaBeta".to_string()
    }

    fn choose_move(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
    ) -> Result<Action, ArenaError> {
        let outcome = alphabeta::search(engine, state, Horizon::Exhaustive);
        finish("AlphaBeta", engine, state, outcome, &mut self.last_stats)
    }
}

/// Depth-limited alpha-beta scored by a heuristic evaluator.
#[derive(Clone, Debug)]
pub struct HeuristicAlphaBetaPlayer<H = DiscWeightHeuristic> {
    config: SearchConfig,
    evaluator: H,
    last_stats: SearchStats,
}

impl Default for HeuristicAlphaBetaPlayer {
    fn default() -> Self {
        Self::new(SearchConfig::default(), DiscWeightHeuristic::default())
    }
}

impl<H: Evaluator> HeuristicAlphaBetaPlayer<H> {
    pub fn new(config: SearchConfig, evaluator: H) -> Self {
        Self {
            config,
            evaluator,
            last_stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }
}

impl<H: Evaluator> super::Player for HeuristicAlphaBetaPlayer<H> {
    fn name(&self) -> String {
        format!("HeuristicAlphaBeta(depth={})", self.config.depth)
    }

    fn choose_move(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
    ) -> Result<Action, ArenaError> {
        let horizon = Horizon::Depth {
            depth: self.config.depth,
            evaluator: &self.evaluator,
        };
        let outcome = alphabeta::search(engine, state, horizon);
        let name = self.name();
        finish(&name, engine, state, outcome, &mut self.last_stats)
    }
}
