//! Push-chain probe and resolution.
//!
//! Starting at the target cell, the probe walks along the push direction
//! collecting occupied cells until it reaches an empty playable cell. Every
//! resident must give way to the push, and the walk must never enter the
//! graveyard ring: the graveyard is a wall, not a sink.

use smallvec::SmallVec;

use super::cell::Cell;
use super::state::BoardState;
use crate::core::Direction;
use crate::error::MoveError;

/// Occupied cells that move, nearest to the target first.
///
/// At most three cards fit in a playable row or column.
pub type Chain = SmallVec<[Cell; 3]>;

/// Walk the chain that a push from `start` along `dir` would move.
///
/// Succeeds as soon as an empty playable cell is reached. `start` must be
/// playable and `dir` a real push.
pub fn probe(board: &BoardState, start: Cell, dir: Direction) -> Result<Chain, MoveError> {
    debug_assert!(dir.is_push());

    let mut chain = Chain::new();
    let mut cell = start;

    loop {
        if cell.is_graveyard() {
            return Err(MoveError::HitsGraveyard(cell));
        }

        let Some(resident) = board.get(cell) else {
            return Ok(chain);
        };

        if !resident.yields_to(dir) {
            return Err(MoveError::Immovable {
                cell,
                direction: dir,
            });
        }

        chain.push(cell);
        cell = cell.step(dir).ok_or(MoveError::HitsGraveyard(cell))?;
    }
}

/// Shift every card in `chain` one step along `dir`, far end first.
///
/// The chain must come from a successful `probe` on the same board.
pub(crate) fn shift(board: &mut BoardState, chain: &Chain, dir: Direction) {
    for &from in chain.iter().rev() {
        if let Some(to) = from.step(dir) {
            let card = board.grid_mut(from).take();
            *board.grid_mut(to) = card;
        }
    }
}
