//! Live game state and turn flow.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{BoardState, GemCells};
use crate::cards::{Card, Catalog, Deck, Hand, HAND_SIZE};
use crate::core::{GameConfig, GameRng, Side, SideMap};
use crate::error::GameError;
use crate::rules::{legal_moves, outcome, GameResult};
use crate::search::{Expectiminimax, Move, TurnView};

/// One applied turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub side: Side,
    pub card: Card,
    pub play: Move,
}

/// What happened after a turn was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game goes on with `next` to move.
    Continue { next: Side },
    /// The board filled.
    Finished(GameResult),
}

/// A game in progress: the one authoritative board, hands and decks.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: BoardState,
    hands: SideMap<Hand>,
    decks: SideMap<Deck>,
    to_move: Side,
    turn: u32,
    history: Vec<TurnRecord>,
}

/// Builder for creating a `Game`.
///
/// ## Example
///
/// ```
/// use joustus::core::{GameConfig, Side};
/// use joustus::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .config(GameConfig::default().with_seed(7))
///     .build();
///
/// assert_eq!(game.to_move(), Side::A);
/// assert_eq!(game.hand(Side::A).len(), 3);
/// assert_eq!(game.deck(Side::B).len(), 13);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    catalog: Catalog,
    gems: Option<GemCells>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Fix the gem cells instead of placing them at random.
    pub fn gems(mut self, gems: GemCells) -> Self {
        self.gems = Some(gems);
        self
    }

    /// Place gems, deal and shuffle both decks, draw opening hands.
    pub fn build(self) -> Game {
        let rng = GameRng::new(self.config.seed);

        let gems = self
            .gems
            .unwrap_or_else(|| GemCells::random(&mut rng.for_context("gems")));

        let decks = SideMap::from_fn(|side| {
            let mut deck = self.catalog.deal(side, self.config.deck_size);
            let context = match side {
                Side::A => "deck-a",
                Side::B => "deck-b",
            };
            deck.shuffle(&mut rng.for_context(context));
            deck
        });

        let mut game = Game {
            board: BoardState::new(gems),
            hands: SideMap::with_value(Hand::empty()),
            decks,
            to_move: self.config.first_player,
            turn: 1,
            history: Vec::new(),
            config: self.config,
        };

        for side in Side::ALL {
            for slot in 0..HAND_SIZE {
                game.draw_into(side, slot);
            }
        }

        debug!(
            "new game (seed {}), gems at {:?}",
            game.config.seed,
            gems.iter().collect::<Vec<_>>()
        );
        game
    }
}

impl Game {
    /// Get the setup configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The live board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// A side's hand.
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    /// A side's remaining deck.
    pub fn deck(&self, side: Side) -> &Deck {
        &self.decks[side]
    }

    /// Side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Turn number (starts at 1).
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Applied turns, oldest first.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Gems held by each side.
    pub fn scores(&self) -> SideMap<u8> {
        self.board.player_scores()
    }

    /// The outcome, once the board has filled.
    pub fn result(&self) -> Option<GameResult> {
        outcome(&self.board)
    }

    /// Whether the board has filled.
    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.hands[self.to_move], &self.board)
    }

    /// What the side to move may see: own hand, the opponent's hand, both
    /// decks by composition, the board.
    pub fn turn_view(&self) -> TurnView<'_> {
        let side = self.to_move;
        let opponent = side.opponent();
        TurnView {
            board: &self.board,
            hand: self.hands[side],
            opponent_hand: self.hands[opponent],
            deck: &self.decks[side],
            opponent_deck: &self.decks[opponent],
        }
    }

    /// Apply a move for the side to move.
    ///
    /// Validates against the live board first; a rejected move changes
    /// nothing. On success the played slot is refilled from the deck (if
    /// any cards remain) and the turn passes unless the board filled.
    pub fn play(&mut self, mv: Move) -> Result<TurnOutcome, GameError> {
        if self.board.is_game_over() {
            return Err(GameError::GameOver);
        }

        let side = self.to_move;
        if mv.slot >= HAND_SIZE {
            return Err(GameError::EmptySlot(mv.slot));
        }
        let card = self.hands[side]
            .get(mv.slot)
            .ok_or(GameError::EmptySlot(mv.slot))?;

        self.board.take_move(card, mv.cell, mv.direction)?;
        self.hands[side].take(mv.slot);
        self.draw_into(side, mv.slot);

        self.history.push(TurnRecord {
            turn: self.turn,
            side,
            card,
            play: mv,
        });
        debug!("turn {}: {} plays {}", self.turn, side, mv);

        if let Some(result) = outcome(&self.board) {
            let scores = self.scores();
            info!(
                "game over after {} turns: {:?} ({} - {})",
                self.turn,
                result,
                scores[Side::A],
                scores[Side::B]
            );
            return Ok(TurnOutcome::Finished(result));
        }

        self.to_move = side.opponent();
        self.turn += 1;
        Ok(TurnOutcome::Continue { next: self.to_move })
    }

    /// Let `ai` choose and apply the move for the side to move.
    ///
    /// Panics if `ai` plays the other side.
    pub fn play_ai_turn(&mut self, ai: &mut Expectiminimax) -> Result<TurnOutcome, GameError> {
        assert_eq!(ai.side(), self.to_move, "searcher plays the wrong side");

        if self.board.is_game_over() {
            return Err(GameError::GameOver);
        }

        let response = ai.consider_turn(&self.turn_view());
        let mv = response.play.ok_or(GameError::NoLegalMove)?;
        self.play(mv)
    }

    /// Alternate AI turns until the board fills.
    pub fn play_out(&mut self, players: &mut SideMap<Expectiminimax>) -> Result<GameResult, GameError> {
        loop {
            let side = self.to_move;
            if let TurnOutcome::Finished(result) = self.play_ai_turn(&mut players[side])? {
                return Ok(result);
            }
        }
    }

    fn draw_into(&mut self, side: Side, slot: usize) {
        if let Some(card) = self.decks[side].draw() {
            self.hands[side].put(slot, card.face_up());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::core::Direction;
    use crate::error::MoveError;

    fn diagonal_game() -> Game {
        GameBuilder::new().gems(GemCells::default()).build()
    }

    #[test]
    fn test_build_deals_hands() {
        let game = diagonal_game();
        for side in Side::ALL {
            assert_eq!(game.hand(side).len(), 3);
            assert_eq!(game.deck(side).len(), 13);
            assert!(game.hand(side).cards().all(|(_, c)| c.owner == side && !c.hidden));
        }
        assert_eq!(game.board().card_count(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameBuilder::new().config(GameConfig::default().with_seed(5)).build();
        let b = GameBuilder::new().config(GameConfig::default().with_seed(5)).build();
        assert_eq!(a.board(), b.board());
        assert_eq!(a.hand(Side::A), b.hand(Side::A));
        assert_eq!(a.deck(Side::B), b.deck(Side::B));
    }

    #[test]
    fn test_play_refills_and_passes_turn() {
        let mut game = diagonal_game();
        let top = *game.deck(Side::A).iter().next().unwrap();

        let outcome = game
            .play(Move::new(1, Cell::new(1, 2), Direction::NoPush))
            .unwrap();

        assert_eq!(outcome, TurnOutcome::Continue { next: Side::B });
        assert_eq!(game.hand(Side::A).get(1), Some(top.face_up()));
        assert_eq!(game.deck(Side::A).len(), 12);
        assert_eq!(game.turn(), 2);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = diagonal_game();
        let before = game.clone();

        let err = game
            .play(Move::new(0, Cell::new(2, 2), Direction::NoPush))
            .unwrap_err();

        assert_eq!(err, GameError::IllegalMove(MoveError::GemNeedsPush(Cell::new(2, 2))));
        assert_eq!(game.board(), before.board());
        assert_eq!(game.hand(Side::A), before.hand(Side::A));
        assert_eq!(game.to_move(), Side::A);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_bad_slot() {
        let mut game = diagonal_game();
        let err = game
            .play(Move::new(3, Cell::new(1, 2), Direction::NoPush))
            .unwrap_err();
        assert_eq!(err, GameError::EmptySlot(3));
    }
}
