//! Cards, hands and decks.
//!
//! ## Key Types
//!
//! - `Card`: immutable value with identity, owner, arrows, hidden flag
//! - `Arrows`: the four push capabilities
//! - `Hand`: three optional card slots
//! - `Deck`: remaining cards; a multiset of possible draws for the search
//! - `Catalog`: arrow layouts dealt into each side's deck

pub mod card;
pub mod catalog;
pub mod deck;
pub mod hand;

pub use card::{Arrows, Card, CardId};
pub use catalog::Catalog;
pub use deck::Deck;
pub use hand::{Hand, HAND_SIZE};
