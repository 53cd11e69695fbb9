//! Game state: board occupancy plus the side to move.
//!
//! ## Board
//!
//! Square grid of `Cell`s stored row-major. The size is fixed for the
//! lifetime of a game.
//!
//! ## GameState
//!
//! Snapshot handed out by the rules engine. Fields are private: once a state
//! has been returned to a caller it is never modified. The engine builds the
//! next state on a copy of the board.

use serde::{Deserialize, Serialize};

use super::error::ArenaError;
use super::player::PlayerId;

/// Occupancy of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The side owning a disc in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(PlayerId::FIRST),
            Cell::White => Some(PlayerId::SECOND),
        }
    }

    /// Single-character symbol used when rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

/// Square board of cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Parse a board from one string per row.
    ///
    /// `B` is black, `W` is white, `.` or a space is empty. Rows must all
    /// have as many cells as there are rows.
    ///
    /// ```
    /// use reversi_arena::core::{Board, Cell};
    ///
    /// let board = Board::parse(&["B.", ".W"]).unwrap();
    /// assert_eq!(board.get(0, 0), Cell::Black);
    /// assert_eq!(board.get(1, 1), Cell::White);
    /// ```
    pub fn parse(rows: &[&str]) -> Result<Self, ArenaError> {
        let size = rows.len();
        let mut board = Self::empty(size);

        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != size {
                return Err(ArenaError::InvalidBoard(format!(
                    "row {row} has {} cells, expected {size}",
                    chars.len()
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    'B' | 'b' => Cell::Black,
                    'W' | 'w' => Cell::White,
                    '.' | ' ' => Cell::Empty,
                    other => {
                        return Err(ArenaError::InvalidBoard(format!(
                            "invalid cell '{other}' at ({row}, {col})"
                        )))
                    }
                };
                board.set(row, col, cell);
            }
        }

        Ok(board)
    }

    /// Board width (and height).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    #[must_use]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Set the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Get the cell at signed coordinates, `None` when off the board.
    #[must_use]
    pub fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        let size = self.size as isize;
        if row < 0 || col < 0 || row >= size || col >= size {
            None
        } else {
            Some(self.get(row as usize, col as usize))
        }
    }

    /// Count cells with the given occupancy.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count discs owned by `player`.
    #[must_use]
    pub fn count_discs(&self, player: PlayerId) -> usize {
        self.count(player.disc())
    }

    /// Is `(row, col)` one of the four corners?
    #[must_use]
    pub fn is_corner(&self, row: usize, col: usize) -> bool {
        let last = self.size - 1;
        (row == 0 || row == last) && (col == 0 || col == last)
    }

    /// Is `(row, col)` on the outer ring (corners included)?
    #[must_use]
    pub fn is_edge(&self, row: usize, col: usize) -> bool {
        let last = self.size - 1;
        row == 0 || row == last || col == 0 || col == last
    }

    /// Iterate over `((row, col), cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / size, i % size), cell))
    }
}

/// Immutable snapshot of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    player_at_turn: PlayerId,
}

impl GameState {
    /// Create a state from a board and the side to move.
    #[must_use]
    pub fn new(board: Board, player_at_turn: PlayerId) -> Self {
        Self {
            board,
            player_at_turn,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub fn player_at_turn(&self) -> PlayerId {
        self.player_at_turn
    }
}
