//! # joustus
//!
//! Game core for a two-player card-pushing game on a 5×5 grid, with an
//! expectiminimax AI.
//!
//! ## Rules in brief
//!
//! Only the inner 3×3 is playable; the outer ring is the graveyard and
//! nothing may be pushed into it. Three inner cells hold gems. On a turn a
//! player places one card from their three-card hand, either on an empty
//! cell or onto an occupied cell, pushing the cards there one step in a
//! direction their card's arrows allow. The game ends once every open cell
//! left is a gem; whoever holds more gems wins.
//!
//! ## Architecture
//!
//! - **Copyable boards**: `BoardState` is a plain `Copy` value, so the
//!   search simulates each branch on its own copy.
//!
//! - **Explicit context**: The search is handed a [`TurnView`] of the board,
//!   both hands and both decks, and returns a [`Response`]. It never
//!   mutates the live game.
//!
//! - **Deterministic setup**: Gems and deck order derive from one seed via
//!   `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Sides, directions, RNG, setup configuration
//! - `cards`: Cards, arrows, hands, decks, the standard catalog
//! - `board`: Grid cells, gems, board state and push resolution
//! - `rules`: Legal move generation and game outcome
//! - `search`: Expectiminimax with alpha-beta and chance nodes
//! - `game`: Live game and turn flow
//! - `error`: Move and game errors

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Direction, GameConfig, GameRng, Side, SideMap};

pub use crate::cards::{Arrows, Card, CardId, Catalog, Deck, Hand};

pub use crate::board::{BoardState, Cell, GemCells};

pub use crate::rules::{legal_moves, GameResult};

pub use crate::search::{Expectiminimax, Move, Response, SearchConfig, SearchStats, TurnView};

pub use crate::game::{Game, GameBuilder, TurnOutcome};

pub use crate::error::{GameError, MoveError};
