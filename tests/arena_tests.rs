//! Match runner and tournament integration tests.

use std::thread;
use std::time::Duration;

use reversi_arena::arena::{MatchConfig, MatchRunner, Termination, Tournament, TournamentConfig};
use reversi_arena::core::{Action, ArenaError, GameState, PlayerId};
use reversi_arena::games::reversi::{DiscWeightHeuristic, Reversi};
use reversi_arena::players::{HeuristicAlphaBetaPlayer, Player, RandomPlayer};
use reversi_arena::rules::RulesEngine;
use reversi_arena::search::SearchConfig;

/// Random player that sleeps before answering.
struct SlowPlayer {
    delay: Duration,
    inner: RandomPlayer,
}

impl SlowPlayer {
    fn new(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            inner: RandomPlayer::new(seed),
        }
    }
}

impl Player for SlowPlayer {
    fn name(&self) -> String {
        "Slow".to_string()
    }

    fn choose_move(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
    ) -> Result<Action, ArenaError> {
        thread::sleep(self.delay);
        self.inner.choose_move(engine, state)
    }
}

/// Always plays the top-left corner.
struct CornerPlayer;

impl Player for CornerPlayer {
    fn name(&self) -> String {
        "Corner".to_string()
    }

    fn choose_move(
        &mut self,
        _engine: &dyn RulesEngine,
        _state: &GameState,
    ) -> Result<Action, ArenaError> {
        Ok(Action::new(0))
    }
}

fn tight_limit() -> MatchConfig {
    MatchConfig::new().with_time_limit(Duration::from_millis(10))
}

fn heuristic_player(depth: u32) -> HeuristicAlphaBetaPlayer {
    let config = SearchConfig::default().with_depth(depth);
    HeuristicAlphaBetaPlayer::new(config, DiscWeightHeuristic::default())
}

// =============================================================================
// Time limit
// =============================================================================

#[test]
fn test_slow_player_forfeits() {
    let runner = MatchRunner::new(Reversi::new(4).unwrap(), tight_limit());
    let mut slow = SlowPlayer::new(Duration::from_millis(40), 1);
    let mut fast = RandomPlayer::new(2);

    let outcome = runner.play([&mut slow, &mut fast], [false, false]).unwrap();

    assert_eq!(outcome.winner_index(), Some(1));
    assert!(outcome.moves.is_empty());
    match outcome.termination {
        Termination::TimeLimitExceeded { seat, elapsed, limit } => {
            assert_eq!(seat, 0);
            assert_eq!(limit, Duration::from_millis(10));
            assert!(elapsed >= Duration::from_millis(40));
        }
        other => panic!("expected a time forfeit, got {other:?}"),
    }
}

#[test]
fn test_slow_second_seat_forfeits_after_first_move() {
    let runner = MatchRunner::new(Reversi::new(4).unwrap(), tight_limit());
    let mut fast = RandomPlayer::new(3);
    let mut slow = SlowPlayer::new(Duration::from_millis(40), 4);

    let outcome = runner.play([&mut fast, &mut slow], [false, false]).unwrap();

    assert_eq!(outcome.winner_index(), Some(0));
    assert_eq!(outcome.moves.len(), 1);
    assert!(matches!(outcome.termination, Termination::TimeLimitExceeded { seat: 1, .. }));
}

#[test]
fn test_waived_slow_player_finishes() {
    let runner = MatchRunner::new(Reversi::new(4).unwrap(), tight_limit());
    let mut slow = SlowPlayer::new(Duration::from_millis(20), 5);
    let mut fast = RandomPlayer::new(6);

    let outcome = runner.play([&mut slow, &mut fast], [true, false]).unwrap();

    assert_eq!(outcome.termination, Termination::Completed);
}

// =============================================================================
// Tournament
// =============================================================================

#[test]
fn test_two_games_swap_seats_once() {
    let tournament = Tournament::new(Reversi::new(6).unwrap(), TournamentConfig::default());
    let mut a = RandomPlayer::new(7);
    let mut b = RandomPlayer::new(8);

    let stats = tournament.play_n_games([&mut a, &mut b], 2, [false, false]).unwrap();

    assert_eq!(stats.games.len(), 2);
    assert!(!stats.games[0].swapped);
    assert!(stats.games[1].swapped);
    assert_eq!(stats.seat_swaps(), 1);
    for identity in PlayerId::BOTH {
        assert_eq!(stats.records[identity].games(), 2);
    }
    assert_eq!(stats.score(PlayerId::FIRST), -stats.score(PlayerId::SECOND));
}

#[test]
fn test_illegal_player_loses_every_seat() {
    let tournament = Tournament::new(Reversi::new(4).unwrap(), TournamentConfig::default());
    let mut cheat = CornerPlayer;
    let mut honest = RandomPlayer::new(9);

    let stats = tournament.play_n_games([&mut cheat, &mut honest], 4, [false, false]).unwrap();

    let record = stats.records[PlayerId::FIRST];
    assert_eq!(record.losses, 4);
    assert_eq!(record.illegal_forfeits, 4);
    assert_eq!(stats.records[PlayerId::SECOND].wins, 4);
    assert_eq!(stats.score(PlayerId::FIRST), -1.0);
    assert_eq!(stats.seat_swaps(), 3);
}

#[test]
fn test_waiver_follows_player_across_seats() {
    let config = TournamentConfig::new().with_match_config(tight_limit());
    let tournament = Tournament::new(Reversi::new(4).unwrap(), config);
    let mut slow = SlowPlayer::new(Duration::from_millis(20), 10);
    let mut fast = RandomPlayer::new(11);

    let stats = tournament.play_n_games([&mut slow, &mut fast], 2, [true, false]).unwrap();

    for game in &stats.games {
        assert_eq!(game.outcome.termination, Termination::Completed, "game {}", game.index);
    }
    assert_eq!(stats.records[PlayerId::FIRST].time_forfeits, 0);
}

#[test]
fn test_tournament_is_symmetric_in_seat_order() {
    let config = TournamentConfig::new()
        .with_match_config(MatchConfig::new().with_time_limit(Duration::from_secs(60)));
    let tournament = Tournament::new(Reversi::new(6).unwrap(), config);

    let mut shallow = heuristic_player(1);
    let mut deep = heuristic_player(2);
    let forward = tournament.play_n_games([&mut shallow, &mut deep], 4, [false, false]).unwrap();

    let mut shallow = heuristic_player(1);
    let mut deep = heuristic_player(2);
    let backward = tournament.play_n_games([&mut deep, &mut shallow], 4, [false, false]).unwrap();

    assert_eq!(forward.records[PlayerId::FIRST], backward.records[PlayerId::SECOND]);
    assert_eq!(forward.records[PlayerId::SECOND], backward.records[PlayerId::FIRST]);
    assert_eq!(forward.score_sum, -backward.score_sum);
}

#[test]
fn test_summary_lists_both_players() {
    let tournament = Tournament::new(Reversi::new(4).unwrap(), TournamentConfig::default());
    let mut a = RandomPlayer::new(12);
    let mut b = RandomPlayer::new(13);

    let stats = tournament.play_n_games([&mut a, &mut b], 3, [false, false]).unwrap();
    let summary = stats.to_string();
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("player 1: "));
    assert!(lines[1].starts_with("player 2: "));
    assert!(lines[0].contains("total score: "));
}
