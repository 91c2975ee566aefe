//! Expectiminimax integration tests.

use joustus::board::{BoardState, Cell, GemCells};
use joustus::cards::{Arrows, Card, CardId, Catalog, Deck, Hand};
use joustus::core::{Direction, Side};
use joustus::search::{Expectiminimax, Move, Response, SearchConfig, TurnView};

fn card(id: u32, owner: Side, arrows: Arrows) -> Card {
    Card::new(CardId::new(id), owner, arrows)
}

fn pushers(owner: Side, base: u32) -> Hand {
    Hand::full([
        card(base, owner, Arrows::ALL),
        card(base + 1, owner, Arrows::ALL),
        card(base + 2, owner, Arrows::ALL),
    ])
}

fn search(side: Side, config: SearchConfig, board: &BoardState, hand: Hand, opponent_hand: Hand) -> (Response, Expectiminimax) {
    let catalog = Catalog::standard();
    let deck = catalog.deal(side, 16);
    let opponent_deck = catalog.deal(side.opponent(), 16);

    let mut ai = Expectiminimax::new(side, config);
    let response = ai.consider_turn(&TurnView {
        board,
        hand,
        opponent_hand,
        deck: &deck,
        opponent_deck: &opponent_deck,
    });
    (response, ai)
}

/// Every inner cell filled except (1, 3); A holds (1, 1) and (2, 2), B holds (3, 3).
fn nearly_full_board(b_gems: &[Cell]) -> BoardState {
    let mut board = BoardState::new(GemCells::default());
    for (i, cell) in Cell::playable().enumerate() {
        if cell == Cell::new(1, 3) {
            continue;
        }
        let owner = if b_gems.contains(&cell) {
            Side::B
        } else if board.gems().contains(cell) {
            Side::A
        } else if i % 2 == 0 {
            Side::A
        } else {
            Side::B
        };
        board.set(cell, Some(card(i as u32, owner, Arrows::ALL)));
    }
    board
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_depth_five_from_empty_board() {
    let board = BoardState::new(GemCells::default());
    let (response, ai) = search(
        Side::A,
        SearchConfig::default().with_depth(5),
        &board,
        pushers(Side::A, 100),
        pushers(Side::B, 200),
    );

    let play = response.play.expect("a move from the opening position");
    assert!(play.cell.is_playable());
    assert!(play.slot < 3);
    assert!((-3.0..=3.0).contains(&response.utility));
    assert!(ai.stats().nodes() > 0);
    assert!(!ai.stats().shortcut);
    assert_eq!(board.card_count(), 0);
}

#[test]
fn test_endgame_shortcut_skips_search() {
    let board = nearly_full_board(&[Cell::new(3, 3)]);
    assert_eq!(board.gem_lead(Side::A), 1);

    let hand = Hand::new([None, Some(card(50, Side::A, Arrows::NONE)), None]);
    let (response, ai) = search(Side::A, SearchConfig::default(), &board, hand, pushers(Side::B, 200));

    assert_eq!(
        response,
        Response::with_move(Move::new(1, Cell::new(1, 3), Direction::NoPush), 1.0)
    );
    assert!(ai.stats().shortcut);
    assert_eq!(ai.stats().nodes(), 0);
}

#[test]
fn test_no_shortcut_when_behind() {
    let board = nearly_full_board(&[Cell::new(2, 2), Cell::new(3, 3)]);
    assert_eq!(board.gem_lead(Side::A), -1);

    let (response, ai) = search(
        Side::A,
        SearchConfig::default(),
        &board,
        pushers(Side::A, 100),
        pushers(Side::B, 200),
    );

    assert!(response.play.is_some());
    assert!(!ai.stats().shortcut);
    assert!(ai.stats().nodes() > 0);
}

#[test]
fn test_shortcut_can_be_disabled() {
    let board = nearly_full_board(&[Cell::new(3, 3)]);
    let (response, ai) = search(
        Side::A,
        SearchConfig::default().with_endgame_shortcut(false),
        &board,
        pushers(Side::A, 100),
        pushers(Side::B, 200),
    );

    assert!(response.play.is_some());
    assert!(!ai.stats().shortcut);
    assert!(ai.stats().max_nodes >= 1);
}

#[test]
fn test_takes_gem_at_depth_one() {
    let mut board = BoardState::new(GemCells::default());
    board.set(Cell::new(2, 1), Some(card(1, Side::A, Arrows::ALL)));
    let hand = Hand::new([Some(card(2, Side::A, Arrows::ALL)), None, None]);

    let (response, _) = search(
        Side::A,
        SearchConfig::default().with_depth(1),
        &board,
        hand,
        pushers(Side::B, 200),
    );

    // Pushing our own card right lands it on the (2, 2) gem; first such move wins ties.
    assert_eq!(
        response,
        Response::with_move(Move::new(0, Cell::new(2, 1), Direction::Right), 1.0)
    );
}

#[test]
fn test_side_b_perspective() {
    let mut board = BoardState::new(GemCells::default());
    board.set(Cell::new(1, 2), Some(card(1, Side::B, Arrows::ALL)));
    let hand = Hand::new([Some(card(2, Side::B, Arrows::ALL)), None, None]);

    let (response, _) = search(
        Side::B,
        SearchConfig::default().with_depth(1),
        &board,
        hand,
        pushers(Side::A, 100),
    );

    assert_eq!(response.utility, 1.0);
    let play = response.play.unwrap();
    assert_eq!(play.cell, Cell::new(1, 2));
}

// =============================================================================
// Pruning
// =============================================================================

#[test]
fn test_pruning_matches_exhaustive_at_depth_two() {
    let mut board = BoardState::new(GemCells::default());
    board.set(Cell::new(1, 2), Some(card(1, Side::A, Arrows::new(true, true, false, false))));
    board.set(Cell::new(2, 1), Some(card(2, Side::B, Arrows::ALL)));
    board.set(Cell::new(3, 2), Some(card(3, Side::B, Arrows::new(false, false, true, true))));

    let hand = Hand::full([
        card(10, Side::A, Arrows::ALL),
        card(11, Side::A, Arrows::new(true, false, false, true)),
        card(12, Side::A, Arrows::NONE),
    ]);
    let opponent_hand = Hand::full([
        card(20, Side::B, Arrows::ALL),
        card(21, Side::B, Arrows::new(false, true, true, false)),
        card(22, Side::B, Arrows::ALL),
    ]);

    let config = SearchConfig::default().with_depth(2);
    let (pruned, pruned_ai) = search(Side::A, config.clone(), &board, hand, opponent_hand);
    let (full, full_ai) = search(Side::A, config.with_pruning(false), &board, hand, opponent_hand);

    assert_eq!(pruned, full);
    assert_eq!(full_ai.stats().cutoffs, 0);
    assert!(pruned_ai.stats().nodes() <= full_ai.stats().nodes());
}

#[test]
fn test_exhaustive_search_visits_everything() {
    let board = BoardState::new(GemCells::default());
    let hand = Hand::new([Some(card(1, Side::A, Arrows::NONE)), None, None]);
    let opponent_hand = Hand::new([Some(card(2, Side::B, Arrows::NONE)), None, None]);

    let (_, ai) = search(
        Side::A,
        SearchConfig::default().with_depth(2).with_pruning(false),
        &board,
        hand,
        opponent_hand,
    );

    // 6 root moves, 5 replies each.
    assert_eq!(ai.stats().max_nodes, 1);
    assert_eq!(ai.stats().min_nodes, 6);
    assert_eq!(ai.stats().leaves, 30);
}

#[test]
fn test_search_with_empty_decks() {
    let board = BoardState::new(GemCells::default());
    let empty = Deck::new();
    let mut ai = Expectiminimax::new(Side::B, SearchConfig::default().with_depth(5));

    let response = ai.consider_turn(&TurnView {
        board: &board,
        hand: pushers(Side::B, 10),
        opponent_hand: pushers(Side::A, 20),
        deck: &empty,
        opponent_deck: &empty,
    });

    assert!(response.play.is_some());
    assert!((-3.0..=3.0).contains(&response.utility));
}
