//! Decks.
//!
//! The live game draws from the front of a deck. The search never reads
//! deck order: it treats a deck as a multiset of possible draws and asks
//! for the distinct outcomes and their probabilities.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::GameRng;

/// An ordered pile of remaining cards.
///
/// Backed by `im::Vector` so snapshots of a game clone decks in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// An empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Iterate in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Occurrences of exactly this card.
    #[must_use]
    pub fn count(&self, card: &Card) -> usize {
        self.cards.iter().filter(|c| *c == card).count()
    }

    /// Probability that a uniformly random draw yields exactly this card.
    ///
    /// Zero for an empty deck.
    #[must_use]
    pub fn probability(&self, card: &Card) -> f32 {
        if self.cards.is_empty() {
            return 0.0;
        }
        self.count(card) as f32 / self.cards.len() as f32
    }

    /// Distinct draw outcomes with their probabilities, in order of first
    /// occurrence. Probabilities sum to 1 for a non-empty deck.
    #[must_use]
    pub fn outcomes(&self) -> Vec<(Card, f32)> {
        let mut seen: FxHashSet<Card> = FxHashSet::default();
        self.cards
            .iter()
            .filter(|card| seen.insert(**card))
            .map(|card| (*card, self.probability(card)))
            .collect()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
