//! Game rules above the board model.
//!
//! - `movegen`: exhaustive legal (slot, cell, direction) enumeration
//! - `engine`: deciding the winner once the board has filled

pub mod engine;
pub mod movegen;

pub use engine::{outcome, GameResult};
pub use movegen::{has_legal_move, legal_moves, PUSH_ORDER};
