//! Core game types: sides, directions, RNG, configuration.
//!
//! These are the building blocks shared by the board model, the move
//! generator, the search and the live game.

pub mod config;
pub mod direction;
pub mod player;
pub mod rng;

pub use config::{GameConfig, STANDARD_DECK_SIZE};
pub use direction::Direction;
pub use player::{Side, SideMap};
pub use rng::GameRng;
