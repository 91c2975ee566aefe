//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::core::Side;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// More gems than the opponent when the board filled.
    Winner(Side),
    /// Equal gem counts.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// The outcome of `board`, or `None` while the game continues.
#[must_use]
pub fn outcome(board: &BoardState) -> Option<GameResult> {
    if !board.is_game_over() {
        return None;
    }

    let lead = board.gem_lead(Side::A);
    Some(match lead {
        l if l > 0 => GameResult::Winner(Side::A),
        l if l < 0 => GameResult::Winner(Side::B),
        _ => GameResult::Draw,
    })
}
