//! Push directions.
//!
//! A move either places a card into an empty cell (`NoPush`) or places it
//! onto an occupied cell and shoves the resident chain one step along the
//! direction. `Up`/`Down` and `Left`/`Right` are opposing pairs.

use serde::{Deserialize, Serialize};

/// Direction a played card pushes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    NoPush,
}

impl Direction {
    /// The four real push directions.
    pub const PUSHES: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The opposing direction. `NoPush` has no opposite and maps to itself.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::NoPush => Direction::NoPush,
        }
    }

    /// Whether this is a real push (anything but `NoPush`).
    #[must_use]
    pub const fn is_push(self) -> bool {
        !matches!(self, Direction::NoPush)
    }

    /// Grid offset as (row delta, column delta). Rows grow downward.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::NoPush => (0, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::NoPush => "no push",
        };
        f.write_str(name)
    }
}
