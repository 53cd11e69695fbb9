//! Reversi rules engine.

use smallvec::SmallVec;
use tracing::warn;

use crate::core::{Action, ArenaError, Board, Cell, GameConfig, GameState, PlayerId};
use crate::rules::RulesEngine;

/// The eight scan directions as `(row delta, col delta)`.
#[rustfmt::skip]
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Reversi on an even-sized square board.
///
/// ## Example
///
/// ```
/// use reversi_arena::games::reversi::Reversi;
/// use reversi_arena::rules::RulesEngine;
///
/// let game = Reversi::default();
/// let state = game.initial_state();
/// assert_eq!(game.actions(&state).len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Reversi {
    config: GameConfig,
}

impl Default for Reversi {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }
}

impl Reversi {
    /// Create a game on a `size` x `size` board.
    ///
    /// Fails unless `size` is even and within the supported range.
    pub fn new(size: usize) -> Result<Self, ArenaError> {
        Self::from_config(GameConfig::new(size))
    }

    /// Create a game from a validated configuration.
    pub fn from_config(config: GameConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Board width.
    pub fn size(&self) -> usize {
        self.config.board_size
    }

    /// Number of opponent discs bracketed by `player` from `(row, col)` in
    /// direction `(dr, dc)`. Zero when the run is empty, hits an empty cell
    /// or runs off the board.
    fn flank_length(
        board: &Board,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
        player: PlayerId,
    ) -> usize {
        let own = player.disc();
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let mut run = 0;

        while let Some(cell) = board.get_signed(r, c) {
            match cell {
                Cell::Empty => return 0,
                cell if cell == own => return run,
                _ => {
                    run += 1;
                    r += dr;
                    c += dc;
                }
            }
        }

        0
    }

    /// Can the side to move place a disc at `(row, col)`?
    ///
    /// Stops at the first direction that flanks and never copies the board;
    /// `actions` calls this once per cell.
    pub fn is_legal_move(&self, state: &GameState, row: usize, col: usize) -> bool {
        let board = state.board();
        if row >= board.size() || col >= board.size() || board.get(row, col) != Cell::Empty {
            return false;
        }

        let player = state.player_at_turn();
        DIRECTIONS
            .iter()
            .any(|&dir| Self::flank_length(board, row, col, dir, player) > 0)
    }

    /// Place a disc for the side to move at `(row, col)`.
    ///
    /// Flips every flanked run, and hands the turn to the other side.
    /// Returns `None` if the move is illegal. `state` itself is untouched.
    pub fn execute_move(&self, state: &GameState, row: usize, col: usize) -> Option<GameState> {
        let board = state.board();
        if row >= board.size() || col >= board.size() || board.get(row, col) != Cell::Empty {
            return None;
        }

        let player = state.player_at_turn();
        let mut flips: SmallVec<[(usize, usize); 16]> = SmallVec::new();

        for &(dr, dc) in &DIRECTIONS {
            let run = Self::flank_length(board, row, col, (dr, dc), player);
            for step in 1..=run as isize {
                flips.push((
                    (row as isize + dr * step) as usize,
                    (col as isize + dc * step) as usize,
                ));
            }
        }

        if flips.is_empty() {
            return None;
        }

        let mut next = board.clone();
        let disc = player.disc();
        for (r, c) in flips {
            next.set(r, c, disc);
        }
        next.set(row, col, disc);

        Some(GameState::new(next, player.other()))
    }
}

impl RulesEngine for Reversi {
    fn initial_state(&self) -> GameState {
        let size = self.size();
        let h = size / 2;
        let mut board = Board::empty(size);

        board.set(h, h, Cell::Black);
        board.set(h - 1, h - 1, Cell::Black);
        board.set(h - 1, h, Cell::White);
        board.set(h, h - 1, Cell::White);

        GameState::new(board, PlayerId::FIRST)
    }

    fn actions(&self, state: &GameState) -> Vec<Action> {
        let size = state.board().size();
        let mut actions = Vec::new();

        for row in 0..size {
            for col in 0..size {
                if self.is_legal_move(state, row, col) {
                    actions.push(Action::from_rc(row, col, size));
                }
            }
        }

        actions
    }

    fn state_after_move(&self, state: &GameState, action: Action) -> Result<GameState, ArenaError> {
        let player = state.player_at_turn();
        let board = state.board();
        let in_range = (action.code() as usize) < board.area();
        let next = if in_range {
            let (row, col) = action.to_rc(board.size());
            self.execute_move(state, row, col)
        } else {
            None
        };

        next.ok_or_else(|| {
            warn!(
                action = %action,
                player = %player,
                "illegal move rejected\n{}",
                self.render_state(state, true)
            );
            ArenaError::IllegalMove { action, player }
        })
    }

    fn utility(&self, state: &GameState, player: PlayerId) -> i32 {
        debug_assert!(self.is_terminal(state), "utility called on a non-terminal state");

        let board = state.board();
        let mine = board.count_discs(player);
        let theirs = board.count_discs(player.other());

        match mine.cmp(&theirs) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
        }
    }

    fn render_state(&self, state: &GameState, show_numbers: bool) -> String {
        let board = state.board();
        let size = board.size();
        let width = board.area().to_string().len();
        let mut out = String::new();

        for row in 0..size {
            out.push('|');
            for col in 0..size {
                let cell = board.get(row, col);
                let text = if show_numbers && cell == Cell::Empty {
                    Action::from_rc(row, col, size).to_string()
                } else {
                    cell.symbol().to_string()
                };
                out.push_str(&format!("{text:^width$}|"));
            }
            out.push('\n');
        }
        if !show_numbers {
            out.push('\n');
        }

        out
    }
}
