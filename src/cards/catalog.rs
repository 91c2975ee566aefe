//! Card catalog and deck dealing.
//!
//! The catalog lists the arrow layouts available to a game. Each side is
//! dealt one face-down copy of the first `deck_size` layouts, each copy
//! with its own `CardId`, so no two dealt cards compare equal.

use super::card::{Arrows, Card, CardId};
use super::deck::Deck;
use crate::core::Side;

/// Ordered list of card layouts.
///
/// ## Example
///
/// ```
/// use joustus::cards::Catalog;
/// use joustus::core::Side;
///
/// let catalog = Catalog::standard();
/// let deck = catalog.deal(Side::A, 16);
/// assert_eq!(deck.len(), 16);
/// assert!(deck.iter().all(|c| c.owner == Side::A && c.hidden));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    layouts: Vec<Arrows>,
}

impl Catalog {
    /// Build a catalog from explicit layouts.
    #[must_use]
    pub fn new(layouts: Vec<Arrows>) -> Self {
        Self { layouts }
    }

    /// The standard 16-card set.
    #[must_use]
    pub fn standard() -> Self {
        const T: bool = true;
        const F: bool = false;

        // (up, down, left, right)
        let layouts = vec![
            Arrows::new(T, F, F, F),
            Arrows::new(F, T, F, F),
            Arrows::new(F, F, T, F),
            Arrows::new(F, F, F, T),
            Arrows::new(T, T, F, F),
            Arrows::new(F, F, T, T),
            Arrows::new(T, F, T, F),
            Arrows::new(T, F, F, T),
            Arrows::new(F, T, T, F),
            Arrows::new(F, T, F, T),
            Arrows::new(T, F, T, T),
            Arrows::new(F, T, T, T),
            Arrows::new(T, T, T, F),
            Arrows::new(T, T, F, T),
            Arrows::ALL,
            Arrows::ALL,
        ];

        Self { layouts }
    }

    /// Number of layouts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// True if the catalog has no layouts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Deal an unshuffled, face-down deck of `size` cards owned by `side`.
    ///
    /// IDs are `side * 1000 + index`, unique across both decks.
    ///
    /// Panics if `size` exceeds the catalog.
    #[must_use]
    pub fn deal(&self, side: Side, size: usize) -> Deck {
        assert!(
            size <= self.layouts.len(),
            "deck size {size} exceeds catalog of {}",
            self.layouts.len()
        );

        let base = side.index() as u32 * 1000;
        self.layouts
            .iter()
            .take(size)
            .enumerate()
            .map(|(i, &arrows)| Card::new(CardId::new(base + i as u32), side, arrows).face_down())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
