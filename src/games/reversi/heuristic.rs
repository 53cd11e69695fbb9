//! Positional heuristic for Reversi.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId};
use crate::search::{Evaluation, Evaluator};

/// Disc count plus a bonus for discs on stable-ish cells.
///
/// For every disc of the evaluated side: `1` (the disc itself) plus
/// `edge_weight * 2` on a corner or `edge_weight * 1` on any other edge cell.
/// Interior discs get no bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscWeightHeuristic {
    /// Multiplier applied to the corner/edge bonus.
    pub edge_weight: i32,
}

impl Default for DiscWeightHeuristic {
    fn default() -> Self {
        Self { edge_weight: 1 }
    }
}

impl DiscWeightHeuristic {
    /// Create a heuristic with a custom edge weight.
    pub fn new(edge_weight: i32) -> Self {
        Self { edge_weight }
    }
}

impl Evaluator for DiscWeightHeuristic {
    fn evaluate(&self, state: &GameState, player: PlayerId) -> Evaluation {
        let board = state.board();
        let disc = player.disc();
        let mut total = 0;
        let mut good = 0;

        for ((row, col), cell) in board.iter() {
            if cell != disc {
                continue;
            }
            total += 1;
            if board.is_corner(row, col) {
                good += 2;
            } else if board.is_edge(row, col) {
                good += 1;
            }
        }

        total + good * self.edge_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn state(rows: &[&str]) -> GameState {
        GameState::new(Board::parse(rows).unwrap(), PlayerId::FIRST)
    }

    #[test]
    fn test_interior_discs_count_once() {
        let s = state(&["....", ".BW.", ".WB.", "...."]);
        let h = DiscWeightHeuristic::default();
        assert_eq!(h.evaluate(&s, PlayerId::FIRST), 2);
        assert_eq!(h.evaluate(&s, PlayerId::SECOND), 2);
    }

    #[test]
    fn test_corner_and_edge_bonus() {
        // Corner (0,0): 1 + 2, edge (0,1): 1 + 1, interior (1,1): 1.
        let s = state(&["BB..", ".B..", "....", "...."]);
        assert_eq!(DiscWeightHeuristic::default().evaluate(&s, PlayerId::FIRST), 6);
        assert_eq!(DiscWeightHeuristic::new(3).evaluate(&s, PlayerId::FIRST), 3 + 9);
    }

    #[test]
    fn test_ignores_opponent_discs() {
        let s = state(&["W..W", "....", "....", "W..B"]);
        let h = DiscWeightHeuristic::default();
        assert_eq!(h.evaluate(&s, PlayerId::FIRST), 3);
        assert_eq!(h.evaluate(&s, PlayerId::SECOND), 9);
    }
}
