//! A live two-player game.
//!
//! - Three gem cells placed at random inside the playable 3×3
//! - Each side gets a shuffled, face-down deck and draws three cards
//! - On your turn: play one hand card, plain or pushing, then redraw
//! - The game ends when no gem-free cell is left empty; most gems wins
//!
//! `Game` owns the only mutable board. AI players read a [`TurnView`]
//! and hand back a move, which `Game::play` validates and applies.
//!
//! [`TurnView`]: crate::search::TurnView

mod session;

pub use session::{Game, GameBuilder, TurnOutcome, TurnRecord};
