//! Players: anything that can pick a move.
//!
//! `Player` exposes a single capability, `choose_move`. The rules engine and
//! the state are passed in on every call, so a player never has to remember
//! which game or seat it is playing.
//!
//! | Player | Strategy |
//! |---|---|
//! | `RandomPlayer` | uniform choice among legal actions |
//! | `InteractivePlayer` | asks an operator over a reader/writer pair |
//! | `MinimaxPlayer` | exhaustive minimax |
//! | `AlphaBetaPlayer` | exhaustive alpha-beta |
//! | `HeuristicAlphaBetaPlayer` | depth-limited alpha-beta with an evaluator |

mod interactive;
mod random;
mod search;

pub use interactive::InteractivePlayer;
pub use random::RandomPlayer;
pub use search::{AlphaBetaPlayer, HeuristicAlphaBetaPlayer, MinimaxPlayer};

use serde::{Deserialize, Serialize};

use crate::core::{Action, ArenaError, GameRng, GameState};
use crate::games::reversi::DiscWeightHeuristic;
use crate::rules::RulesEngine;
use crate::search::SearchConfig;

/// A strategy for choosing moves.
pub trait Player {
    /// Display name for logs and summaries.
    fn name(&self) -> String;

    /// Pick one action for the side to move in `state`.
    ///
    /// Must only be called when the side to move has a legal action.
    /// The returned action is not guaranteed to be legal; the match runner
    /// checks it.
    fn choose_move(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
    ) -> Result<Action, ArenaError>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn choose_move(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
    ) -> Result<Action, ArenaError> {
        (**self).choose_move(engine, state)
    }
}

/// Player variants selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Random,
    Human,
    Minimax,
    AlphaBeta,
    Heuristic,
}

impl PlayerKind {
    /// All variants, in display order.
    pub const ALL: [PlayerKind; 5] = [
        PlayerKind::Random,
        PlayerKind::Human,
        PlayerKind::Minimax,
        PlayerKind::AlphaBeta,
        PlayerKind::Heuristic,
    ];

    /// Lowercase name used in configuration files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Random => "random",
            PlayerKind::Human => "human",
            PlayerKind::Minimax => "minimax",
            PlayerKind::AlphaBeta => "alphabeta",
            PlayerKind::Heuristic => "heuristic",
        }
    }

    /// Build a player of this kind.
    ///
    /// `rng` seeds random players, `search` and `heuristic` configure the
    /// depth-limited player; other kinds ignore them.
    pub fn build(
        self,
        search: &SearchConfig,
        heuristic: DiscWeightHeuristic,
        rng: GameRng,
    ) -> Box<dyn Player> {
        match self {
            PlayerKind::Random => Box::new(RandomPlayer::with_rng(rng)),
            PlayerKind::Human => Box::new(InteractivePlayer::stdio()),
            PlayerKind::Minimax => Box::new(MinimaxPlayer::new()),
            PlayerKind::AlphaBeta => Box::new(AlphaBetaPlayer::new()),
            PlayerKind::Heuristic => {
                Box::new(HeuristicAlphaBetaPlayer::new(search.clone(), heuristic))
            }
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlayerKind {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<_> = PlayerKind::ALL.iter().map(|k| k.as_str()).collect();
                let known = known.join(", ");
                ArenaError::Config(format!("unknown player kind '{s}' (expected one of: {known})"))
            })
    }
}
