//! Gem cells: the three fixed scoring positions.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, PLAY_MAX, PLAY_MIN};
use crate::core::GameRng;

/// Number of gem cells on a board.
pub const GEM_COUNT: usize = 3;

/// Three distinct playable cells chosen at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GemCells {
    cells: [Cell; GEM_COUNT],
}

impl GemCells {
    /// Create from explicit cells.
    ///
    /// Panics if a cell is not playable or the cells are not distinct.
    #[must_use]
    pub fn new(cells: [Cell; GEM_COUNT]) -> Self {
        for (i, cell) in cells.iter().enumerate() {
            assert!(cell.is_playable(), "gem cell {cell} is not playable");
            assert!(!cells[..i].contains(cell), "duplicate gem cell {cell}");
        }
        Self { cells }
    }

    /// Pick three distinct playable cells uniformly at random.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        let mut cells: Vec<Cell> = Vec::with_capacity(GEM_COUNT);
        while cells.len() < GEM_COUNT {
            let row = rng.gen_range_usize(PLAY_MIN..PLAY_MAX + 1);
            let col = rng.gen_range_usize(PLAY_MIN..PLAY_MAX + 1);
            let cell = Cell::new(row, col);
            if !cells.contains(&cell) {
                cells.push(cell);
            }
        }
        Self::new([cells[0], cells[1], cells[2]])
    }

    /// Whether `cell` holds a gem.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Iterate over the gem cells.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl Default for GemCells {
    /// The main diagonal.
    fn default() -> Self {
        Self::new([Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 3)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_gems_distinct_and_playable() {
        for seed in 0..50 {
            let gems = GemCells::random(&mut GameRng::new(seed));
            let cells: Vec<_> = gems.iter().collect();
            assert!(cells.iter().all(|c| c.is_playable()));
            assert_ne!(cells[0], cells[1]);
            assert_ne!(cells[0], cells[2]);
            assert_ne!(cells[1], cells[2]);
        }
    }

    #[test]
    fn test_random_gems_deterministic() {
        let a = GemCells::random(&mut GameRng::new(9));
        let b = GemCells::random(&mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "not playable")]
    fn test_gem_in_graveyard() {
        let _ = GemCells::new([Cell::new(0, 1), Cell::new(2, 2), Cell::new(3, 3)]);
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn test_duplicate_gems() {
        let _ = GemCells::new([Cell::new(2, 2), Cell::new(2, 2), Cell::new(3, 3)]);
    }
}
