//! Error types.
//!
//! Illegal placements are ordinary, expected outcomes: the board reports
//! them as a tagged `MoveError` and stays untouched, and the caller picks a
//! different action.

use thiserror::Error;

use crate::board::Cell;
use crate::core::Direction;

/// Why a placement is not legal on a given board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {0} is outside the playable area")]
    OutsidePlayArea(Cell),

    #[error("card has no arrow to push {0}")]
    CannotPush(Direction),

    #[error("cell {0} is occupied; placing there requires a push")]
    Occupied(Cell),

    #[error("gem cell {0} has no card to push")]
    GemNeedsPush(Cell),

    #[error("card at {cell} cannot be pushed {direction}")]
    Immovable { cell: Cell, direction: Direction },

    #[error("push chain would run into the graveyard at {0}")]
    HitsGraveyard(Cell),
}

/// Why the live game rejected a turn.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("game already over")]
    GameOver,

    #[error("hand slot {0} holds no card")]
    EmptySlot(usize),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),

    #[error("no legal move available")]
    NoLegalMove,
}
