//! Game setup configuration.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Number of cards in each side's deck at the start of a standard game.
pub const STANDARD_DECK_SIZE: usize = 16;

/// Game setup parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for gem placement and deck shuffles.
    /// Same seed produces the same opening position.
    pub seed: u64,

    /// Cards dealt into each side's deck (at most the catalog size).
    pub deck_size: usize,

    /// Side that takes the first turn.
    pub first_player: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            deck_size: STANDARD_DECK_SIZE,
            first_player: Side::A,
        }
    }
}

impl GameConfig {
    /// Set the setup seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set which side moves first.
    #[must_use]
    pub fn with_first_player(mut self, side: Side) -> Self {
        self.first_player = side;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.deck_size, 16);
        assert_eq!(config.first_player, Side::A);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(7)
            .with_deck_size(8)
            .with_first_player(Side::B);

        assert_eq!(config.seed, 7);
        assert_eq!(config.deck_size, 8);
        assert_eq!(config.first_player, Side::B);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
