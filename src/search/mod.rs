//! Expectiminimax search for the acting side.
//!
//! ## Overview
//!
//! - **Four node kinds**: our move (MAX), their move (MIN), and a chance
//!   node for each side's draw into the slot it just played from.
//! - **Hidden information**: both decks are known by composition only;
//!   draws are averaged by their probability.
//! - **Alpha-beta**: exact on deterministic levels, a partial-expectation
//!   cutoff on chance levels.
//! - **Isolation**: every branch works on its own board and hand copies.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use joustus::search::{Expectiminimax, SearchConfig};
//!
//! let mut ai = Expectiminimax::new(Side::B, SearchConfig::default());
//! let response = ai.consider_turn(&game.turn_view());
//! println!("{:?} worth {:.2}", response.play, response.utility);
//! ```

pub mod config;
pub mod expectiminimax;
pub mod node;
pub mod response;
pub mod stats;

pub use config::SearchConfig;
pub use expectiminimax::{Expectiminimax, TurnView};
pub use node::NodeKind;
pub use response::{Move, Response};
pub use stats::SearchStats;
