//! A series of matches between the same two players.
//!
//! Seats are reversed before every match after the first, waivers
//! included, so each player moves first in alternating games. Results
//! are credited to the player, never to the seat it happened to occupy.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ArenaError, PlayerId, PlayerMap};
use crate::players::Player;
use crate::rules::RulesEngine;

use super::config::TournamentConfig;
use super::match_runner::{MatchOutcome, MatchRunner, Termination};

/// Win/draw/loss counters for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// Losses caused by exceeding the time limit.
    pub time_forfeits: u32,
    /// Losses caused by an illegal move.
    pub illegal_forfeits: u32,
}

impl Record {
    /// Games counted in this record.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// One match of a tournament.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// Zero-based game number.
    pub index: u32,

    /// Whether the second player passed in took seat 0 for this game.
    pub swapped: bool,

    /// Outcome by seat.
    pub outcome: MatchOutcome,
}

impl GameSummary {
    /// Map a seat of this game to the player occupying it.
    #[must_use]
    pub fn identity_of_seat(&self, seat: usize) -> PlayerId {
        let player = PlayerId::new(seat);
        if self.swapped {
            player.other()
        } else {
            player
        }
    }

    /// Winning player by identity, `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome.winner_index().map(|seat| self.identity_of_seat(seat))
    }
}

/// Aggregated results, keyed by player identity.
///
/// `PlayerId::FIRST` is the first player passed to `play_n_games`,
/// `PlayerId::SECOND` the other, whatever seats they took.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TournamentStats {
    pub records: PlayerMap<Record>,

    /// Sum of `+1`/`0`/`-1` over all games, from the first player's side.
    pub score_sum: i64,

    pub games: Vec<GameSummary>,
}

impl TournamentStats {
    /// Average score of `identity` over all games, in `[-1, 1]`.
    #[must_use]
    pub fn score(&self, identity: PlayerId) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        let sum = if identity == PlayerId::FIRST {
            self.score_sum
        } else {
            -self.score_sum
        };
        sum as f64 / self.games.len() as f64
    }

    /// Number of games whose seating differs from the game before.
    #[must_use]
    pub fn seat_swaps(&self) -> usize {
        self.games.windows(2).filter(|pair| pair[0].swapped != pair[1].swapped).count()
    }

    fn record(&mut self, summary: GameSummary) {
        match summary.winner() {
            None => {
                self.records[PlayerId::FIRST].draws += 1;
                self.records[PlayerId::SECOND].draws += 1;
            }
            Some(winner) => {
                let loser = winner.other();
                self.records[winner].wins += 1;
                self.records[loser].losses += 1;
                match summary.outcome.termination {
                    Termination::Completed => {}
                    Termination::TimeLimitExceeded { .. } => self.records[loser].time_forfeits += 1,
                    Termination::IllegalMove { .. } => self.records[loser].illegal_forfeits += 1,
                }
                self.score_sum += if winner == PlayerId::FIRST { 1 } else { -1 };
            }
        }
        self.games.push(summary);
    }
}

impl fmt::Display for TournamentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (identity, record) in self.records.iter() {
            writeln!(
                f,
                "player {}: {} win, {} draw, {} lost, total score: {}",
                identity.index() + 1,
                record.wins,
                record.draws,
                record.losses,
                self.score(identity)
            )?;
        }
        Ok(())
    }
}

/// Runs repeated matches with alternating seats.
pub struct Tournament<E: RulesEngine> {
    runner: MatchRunner<E>,
}

impl<E: RulesEngine> Tournament<E> {
    pub fn new(engine: E, config: TournamentConfig) -> Self {
        Self {
            runner: MatchRunner::new(engine, config.match_config),
        }
    }

    /// Play `n` matches between `players`.
    ///
    /// `waivers[i]` exempts `players[i]` from the time limit and follows it
    /// across seat changes. A player error aborts the whole tournament.
    pub fn play_n_games(
        &self,
        mut players: [&mut dyn Player; 2],
        n: u32,
        waivers: [bool; 2],
    ) -> Result<TournamentStats, ArenaError> {
        let names = [players[0].name(), players[1].name()];
        let mut stats = TournamentStats::default();

        for index in 0..n {
            let swapped = index % 2 == 1;
            if index > 0 {
                debug!(game = index + 1, "reversing seats");
            }

            let [a, b] = &mut players;
            let (seats, seat_waivers): ([&mut dyn Player; 2], _) = if swapped {
                ([&mut **b, &mut **a], [waivers[1], waivers[0]])
            } else {
                ([&mut **a, &mut **b], waivers)
            };
            let (first, second) = if swapped {
                (&names[1], &names[0])
            } else {
                (&names[0], &names[1])
            };
            info!(game = index + 1, first = %first, second = %second, "starting game");

            let outcome = self.runner.play(seats, seat_waivers)?;
            let summary = GameSummary { index, swapped, outcome };
            info!(
                game = index + 1,
                winner = ?summary.winner().map(|id| &names[id.index()]),
                termination = ?summary.outcome.termination,
                "game finished"
            );
            stats.record(summary);
        }

        info!(
            games = n,
            score_first = stats.score(PlayerId::FIRST),
            score_second = stats.score(PlayerId::SECOND),
            "tournament finished"
        );
        Ok(stats)
    }
}
