//! Grid coordinates.
//!
//! The board is a 5×5 grid. The outer ring (row or column 0 or 4) is the
//! graveyard: never playable, never holding a card, and a hard wall for
//! push chains. Only the inner 3×3 is playable.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Side length of the full grid, graveyard ring included.
pub const GRID_SIZE: usize = 5;

/// First and last playable row/column index.
pub const PLAY_MIN: usize = 1;
pub const PLAY_MAX: usize = 3;

/// A grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a cell. Panics if outside the 5×5 grid.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE, "cell outside the grid");
        Self { row, col }
    }

    /// True for the inner 3×3.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        self.row >= PLAY_MIN && self.row <= PLAY_MAX && self.col >= PLAY_MIN && self.col <= PLAY_MAX
    }

    /// True for the outer ring.
    #[must_use]
    pub const fn is_graveyard(self) -> bool {
        !self.is_playable()
    }

    /// The neighbouring cell along `dir`, or `None` if that leaves the grid.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Cell { row, col })
    }

    /// All playable cells, row-major.
    pub fn playable() -> impl Iterator<Item = Cell> {
        (PLAY_MIN..=PLAY_MAX)
            .flat_map(|row| (PLAY_MIN..=PLAY_MAX).map(move |col| Cell { row, col }))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
