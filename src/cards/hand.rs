//! Three-slot hands.
//!
//! A hand is a fixed array of optional cards. An empty slot means the card
//! there was played and not yet redrawn. Hands are `Copy`: the search
//! mutates its own copies and never the caller's.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Number of slots in a hand.
pub const HAND_SIZE: usize = 3;

/// A player's hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    slots: [Option<Card>; HAND_SIZE],
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slots: [None; HAND_SIZE],
        }
    }

    /// Create a hand from explicit slots.
    #[must_use]
    pub const fn new(slots: [Option<Card>; HAND_SIZE]) -> Self {
        Self { slots }
    }

    /// Create a full hand.
    #[must_use]
    pub const fn full(cards: [Card; HAND_SIZE]) -> Self {
        Self {
            slots: [Some(cards[0]), Some(cards[1]), Some(cards[2])],
        }
    }

    /// The card in `slot`, if any.
    ///
    /// Panics if `slot >= HAND_SIZE`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Card> {
        assert!(slot < HAND_SIZE, "hand slot {slot} out of range");
        self.slots[slot]
    }

    /// Remove and return the card in `slot`.
    pub fn take(&mut self, slot: usize) -> Option<Card> {
        assert!(slot < HAND_SIZE, "hand slot {slot} out of range");
        self.slots[slot].take()
    }

    /// Put `card` into `slot`, returning what was there.
    pub fn put(&mut self, slot: usize, card: Card) -> Option<Card> {
        assert!(slot < HAND_SIZE, "hand slot {slot} out of range");
        self.slots[slot].replace(card)
    }

    /// Copy of this hand with `slot` emptied.
    #[must_use]
    pub fn without(mut self, slot: usize) -> Self {
        self.take(slot);
        self
    }

    /// Index of the first empty slot.
    #[must_use]
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Index of the first slot holding a card.
    #[must_use]
    pub fn first_card_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_some)
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// True if no slot holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate over (slot, card) for occupied slots, in slot order.
    pub fn cards(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, card)| card.map(|c| (slot, c)))
    }
}
