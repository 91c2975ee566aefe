//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The game is strictly two-player: side `A` (moves first by default) and
//! side `B`. Every card records the side that owns it.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, used for hands, decks and
//! gem scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Raw index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Player A"),
            Side::B => write!(f, "Player B"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use joustus::core::{Side, SideMap};
///
/// let mut gems: SideMap<u8> = SideMap::with_value(0);
/// gems[Side::B] += 2;
///
/// assert_eq!(gems[Side::A], 0);
/// assert_eq!(gems[Side::B], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create from explicit values for A and B.
    pub const fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::A), factory(Side::B)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
        assert_eq!(Side::A.opponent().opponent(), Side::A);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::A), "Player A");
        assert_eq!(format!("{}", Side::B), "Player B");
    }

    #[test]
    fn test_side_map_from_fn() {
        let map = SideMap::from_fn(|s| s.index() * 10);
        assert_eq!(map[Side::A], 0);
        assert_eq!(map[Side::B], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map = SideMap::with_value(0);
        map[Side::A] = 3;
        *map.get_mut(Side::B) += 1;
        assert_eq!(map, SideMap::new(3, 1));
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(1u8, 2u8);
        let json = serde_json::to_string(&map).unwrap();
        let back: SideMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
