//! Side identification and per-side data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two sides of a match. `PlayerId::FIRST`
//! plays the black discs and always moves first.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`, used wherever a value is
//! kept per side (tournament records, waiver flags).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::state::Cell;

/// One of the two sides of a game.
///
/// Indices are 0-based: `PlayerId(0)` is black and moves first,
/// `PlayerId(1)` is white.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Black, the side that moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// White, the side that moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Both sides in seat order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::FIRST, PlayerId::SECOND];

    /// Create a player ID from a seat index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0 or 1.
    #[must_use]
    pub fn new(index: usize) -> Self {
        assert!(index < 2, "PlayerId index must be 0 or 1, got {index}");
        Self(index as u8)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// The board mark placed by this side.
    #[must_use]
    pub const fn disc(self) -> Cell {
        match self.0 {
            0 => Cell::Black,
            _ => Cell::White,
        }
    }

    /// Single-character symbol used when rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self.0 {
            0 => 'B',
            _ => 'W',
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use reversi_arena::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[PlayerId::SECOND] += 1;
///
/// assert_eq!(wins[PlayerId::FIRST], 0);
/// assert_eq!(wins[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a map from values in seat order.
    pub fn from_array(data: [T; 2]) -> Self {
        Self { data }
    }

    /// Create a new map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::BOTH.into_iter().zip(self.data.iter())
    }

    /// Consume the map, returning values in seat order.
    pub fn into_array(self) -> [T; 2] {
        self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
