//! Uniformly random legal moves from a seeded stream.

use crate::core::{Action, ArenaError, GameRng, GameState};
use crate::rules::RulesEngine;

use super::Player;

/// Picks a uniformly random legal action.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a reproducible random player.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a random player drawing from an existing stream.
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> String {
        "Random".to_string()
    }

    fn choose_move(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
    ) -> Result<Action, ArenaError> {
        let actions = engine.actions(state);
        self.rng
            .choose(&actions)
            .copied()
            .ok_or(ArenaError::NoLegalMoves {
                player: engine.player_at_turn(state),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, PlayerId};
    use crate::games::reversi::Reversi;

    #[test]
    fn test_returns_legal_action() {
        let game = Reversi::default();
        let state = game.initial_state();
        let legal = game.actions(&state);
        let mut player = RandomPlayer::new(7);

        for _ in 0..20 {
            let action = player.choose_move(&game, &state).unwrap();
            assert!(legal.contains(&action));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let game = Reversi::default();
        let state = game.initial_state();
        let mut a = RandomPlayer::new(99);
        let mut b = RandomPlayer::new(99);

        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&game, &state).unwrap(),
                b.choose_move(&game, &state).unwrap()
            );
        }
    }

    #[test]
    fn test_no_legal_moves_is_an_error() {
        let game = Reversi::new(4).unwrap();
        let state = GameState::new(
            Board::parse(&["BBBB", "BBBB", "BBBB", "BBB."]).unwrap(),
            PlayerId::SECOND,
        );

        let err = RandomPlayer::new(1).choose_move(&game, &state).unwrap_err();
        assert!(matches!(err, ArenaError::NoLegalMoves { player } if player == PlayerId::SECOND));
    }
}
