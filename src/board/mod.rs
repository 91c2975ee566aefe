//! Board model: grid, gem cells, placement legality, push resolution,
//! scoring and end-of-game detection.
//!
//! Pure data and rules. The live game and the search both go through
//! `BoardState::check_move` / `BoardState::take_move`, so a move the search
//! picks is validated and applied exactly the way the game applies it.

pub mod cell;
pub mod gems;
pub mod push;
pub mod state;

pub use cell::{Cell, GRID_SIZE};
pub use gems::{GemCells, GEM_COUNT};
pub use push::Chain;
pub use state::BoardState;
