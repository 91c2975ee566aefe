//! Logical board state and placement rules.
//!
//! `BoardState` is a small `Copy` value: a 5×5 grid of optional cards plus
//! the fixed gem cells. The live game owns one; the search copies it per
//! branch and never touches the original.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, GRID_SIZE};
use super::gems::GemCells;
use super::push;
use crate::cards::Card;
use crate::core::{Direction, Side, SideMap};
use crate::error::MoveError;

type Grid = [[Option<Card>; GRID_SIZE]; GRID_SIZE];

/// Board grid plus gem positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    grid: Grid,
    gems: GemCells,
}

impl BoardState {
    /// An empty board with the given gem cells.
    #[must_use]
    pub fn new(gems: GemCells) -> Self {
        Self {
            grid: [[None; GRID_SIZE]; GRID_SIZE],
            gems,
        }
    }

    /// The gem cells.
    #[must_use]
    pub fn gems(&self) -> &GemCells {
        &self.gems
    }

    /// Card at `cell`, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Card> {
        self.grid[cell.row][cell.col]
    }

    /// Overwrite `cell` directly, bypassing the placement rules.
    ///
    /// For setting up positions. Panics on graveyard cells.
    pub fn set(&mut self, cell: Cell, card: Option<Card>) {
        assert!(cell.is_playable(), "cannot place a card in the graveyard at {cell}");
        self.grid[cell.row][cell.col] = card;
    }

    pub(crate) fn grid_mut(&mut self, cell: Cell) -> &mut Option<Card> {
        &mut self.grid[cell.row][cell.col]
    }

    /// Independent copy. Cards are values, so only the grid is duplicated.
    #[must_use]
    pub fn copy_state(&self) -> BoardState {
        *self
    }

    /// Check whether `card` may be played at `cell` pushing `dir`.
    pub fn check_move(&self, card: &Card, cell: Cell, dir: Direction) -> Result<(), MoveError> {
        if !cell.is_playable() {
            return Err(MoveError::OutsidePlayArea(cell));
        }
        if !card.can_push(dir) {
            return Err(MoveError::CannotPush(dir));
        }

        let occupied = self.get(cell).is_some();
        let gem_here = self.gems.contains(cell);

        if dir == Direction::NoPush {
            return if occupied {
                Err(MoveError::Occupied(cell))
            } else if gem_here {
                Err(MoveError::GemNeedsPush(cell))
            } else {
                Ok(())
            };
        }

        if !occupied && gem_here {
            return Err(MoveError::GemNeedsPush(cell));
        }

        push::probe(self, cell, dir).map(|_| ())
    }

    /// Whether `card` may be played at `cell` pushing `dir`.
    #[must_use]
    pub fn is_valid_move(&self, card: &Card, cell: Cell, dir: Direction) -> bool {
        self.check_move(card, cell, dir).is_ok()
    }

    /// Play `card` at `cell`, first shifting the push chain along `dir`.
    ///
    /// Re-validates; on `Err` the board is left untouched.
    pub fn take_move(&mut self, card: Card, cell: Cell, dir: Direction) -> Result<(), MoveError> {
        self.check_move(&card, cell, dir)?;

        if dir.is_push() {
            let chain = push::probe(self, cell, dir)?;
            push::shift(self, &chain, dir);
        }
        *self.grid_mut(cell) = Some(card);
        Ok(())
    }

    /// Copy of this board with the move applied.
    pub fn with_move(&self, card: Card, cell: Cell, dir: Direction) -> Result<BoardState, MoveError> {
        let mut next = self.copy_state();
        next.take_move(card, cell, dir)?;
        Ok(next)
    }

    /// Gem cells held by each side's cards.
    #[must_use]
    pub fn player_scores(&self) -> SideMap<u8> {
        let mut scores = SideMap::with_value(0u8);
        for cell in self.gems.iter() {
            if let Some(card) = self.get(cell) {
                scores[card.owner] += 1;
            }
        }
        scores
    }

    /// Gem differential from `side`'s point of view, in [-3, 3].
    #[must_use]
    pub fn gem_lead(&self, side: Side) -> i8 {
        let scores = self.player_scores();
        scores[side] as i8 - scores[side.opponent()] as i8
    }

    /// Playable cells with no card.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::playable().filter(|&cell| self.get(cell).is_none())
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.grid.iter().flatten().flatten().count()
    }

    /// True once no playable cell is both card-less and gem-free.
    ///
    /// Card-less gem cells do not keep the game going: they can only be
    /// filled by a push.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.empty_cells().all(|cell| self.gems.contains(cell))
    }
}

impl std::fmt::Display for BoardState {
    /// One line per row: `.` empty, `*` empty gem, `a`/`b` card (upper-case on a gem).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell = Cell::new(row, col);
                let gem = self.gems.contains(cell);
                let ch = match (self.get(cell), gem) {
                    (Some(card), false) if card.owner == Side::A => 'a',
                    (Some(_), false) => 'b',
                    (Some(card), true) if card.owner == Side::A => 'A',
                    (Some(_), true) => 'B',
                    (None, true) => '*',
                    (None, false) => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
