//! Move and search-result values.

use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::core::Direction;

/// A concrete action: play the card in hand `slot` at `cell`, pushing `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub slot: usize,
    pub cell: Cell,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(slot: usize, cell: Cell, direction: Direction) -> Self {
        Self {
            slot,
            cell,
            direction,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slot {} at {} ({})", self.slot, self.cell, self.direction)
    }
}

/// Result of evaluating a search node.
///
/// `play` is `None` for leaves and chance nodes: the move is decided at
/// the deterministic node that chose which card to play.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub play: Option<Move>,
    pub utility: f32,
}

impl Response {
    /// A moveless result.
    #[must_use]
    pub const fn value(utility: f32) -> Self {
        Self {
            play: None,
            utility,
        }
    }

    /// A result carrying a move.
    #[must_use]
    pub const fn with_move(play: Move, utility: f32) -> Self {
        Self {
            play: Some(play),
            utility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_has_no_move() {
        let r = Response::value(1.5);
        assert_eq!(r.play, None);
        assert_eq!(r.utility, 1.5);
    }

    #[test]
    fn test_display() {
        let mv = Move::new(2, Cell::new(3, 1), Direction::Up);
        assert_eq!(mv.to_string(), "slot 2 at (3, 1) (up)");
    }

    #[test]
    fn test_serialization() {
        let r = Response::with_move(Move::new(0, Cell::new(1, 2), Direction::NoPush), -2.0);
        let json = serde_json::to_string(&r).unwrap();
        let back: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
