//! Legal move enumeration.
//!
//! For every card in the hand and every playable cell, a plain placement is
//! tried first; only when that is illegal are the card's pushes tried, in
//! the order down, left, right, up. Enumeration order is slot, then row,
//! then column. The search keeps the first of equally good moves, so this
//! order decides ties.

use crate::board::{BoardState, Cell};
use crate::cards::Hand;
use crate::core::Direction;
use crate::search::Move;

/// Push directions in the order they are tried.
pub const PUSH_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

/// All legal moves for `hand` on `board`. Empty slots contribute nothing.
#[must_use]
pub fn legal_moves(hand: &Hand, board: &BoardState) -> Vec<Move> {
    let mut moves = Vec::new();

    for (slot, card) in hand.cards() {
        for cell in Cell::playable() {
            if board.is_valid_move(&card, cell, Direction::NoPush) {
                moves.push(Move::new(slot, cell, Direction::NoPush));
                continue;
            }

            for dir in PUSH_ORDER {
                if card.can_push(dir) && board.is_valid_move(&card, cell, dir) {
                    moves.push(Move::new(slot, cell, dir));
                }
            }
        }
    }

    moves
}

/// Whether `hand` has at least one legal move on `board`.
#[must_use]
pub fn has_legal_move(hand: &Hand, board: &BoardState) -> bool {
    hand.cards().any(|(_, card)| {
        Cell::playable().any(|cell| {
            std::iter::once(Direction::NoPush)
                .chain(PUSH_ORDER)
                .any(|dir| board.is_valid_move(&card, cell, dir))
        })
    })
}
