//! Card values.
//!
//! A `Card` is an immutable value: identity, owner, arrows and the
//! face-down flag. Board copies and hands hold cards by value, so a card
//! shared between the live board and a simulated one can never diverge.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Side};

/// Card identity. Unique per dealt card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The four independent push capabilities of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrows {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Arrows {
    /// No arrows: the card can only be placed into empty cells.
    pub const NONE: Arrows = Arrows {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Arrows on every side.
    pub const ALL: Arrows = Arrows {
        up: true,
        down: true,
        left: true,
        right: true,
    };

    /// Build from flags in (up, down, left, right) order.
    #[must_use]
    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Whether there is an arrow pointing `dir`. `NoPush` always holds.
    #[must_use]
    pub const fn points(self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::NoPush => true,
        }
    }
}

/// A card: identity, owner, arrows, and the presentation-only hidden flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub owner: Side,
    pub arrows: Arrows,
    /// Face-down (in a deck). Ignored by the rules and the search.
    pub hidden: bool,
}

impl Card {
    /// Create a face-up card.
    #[must_use]
    pub const fn new(id: CardId, owner: Side, arrows: Arrows) -> Self {
        Self {
            id,
            owner,
            arrows,
            hidden: false,
        }
    }

    /// Copy of this card turned face-down.
    #[must_use]
    pub const fn face_down(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Copy of this card turned face-up.
    #[must_use]
    pub const fn face_up(mut self) -> Self {
        self.hidden = false;
        self
    }

    /// Whether this card, when played, may push in `dir`.
    #[must_use]
    pub const fn can_push(&self, dir: Direction) -> bool {
        self.arrows.points(dir)
    }

    /// Whether this card, sitting on the board, gives way to a push in `dir`.
    ///
    /// A resident moves along `dir` only if it has an arrow facing back
    /// against the push: pushing `Down` onto it needs its `up` arrow.
    #[must_use]
    pub const fn yields_to(&self, dir: Direction) -> bool {
        match dir {
            Direction::NoPush => false,
            _ => self.arrows.points(dir.opposite()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_push() {
        let card = Card::new(CardId::new(1), Side::A, Arrows::new(true, false, false, true));
        assert!(card.can_push(Direction::Up));
        assert!(card.can_push(Direction::Right));
        assert!(!card.can_push(Direction::Down));
        assert!(!card.can_push(Direction::Left));
        assert!(card.can_push(Direction::NoPush));
    }

    #[test]
    fn test_yields_to_uses_opposing_arrow() {
        let up_only = Card::new(CardId::new(2), Side::B, Arrows::new(true, false, false, false));
        assert!(up_only.yields_to(Direction::Down));
        assert!(!up_only.yields_to(Direction::Up));
        assert!(!up_only.yields_to(Direction::Left));
        assert!(!up_only.yields_to(Direction::NoPush));
    }

    #[test]
    fn test_face_flags() {
        let card = Card::new(CardId::new(3), Side::A, Arrows::ALL);
        assert!(!card.hidden);
        assert!(card.face_down().hidden);
        assert!(!card.face_down().face_up().hidden);
    }
}
