//! Expectiminimax search with alpha-beta pruning.
//!
//! Depth-first over four node kinds (see [`NodeKind`]). Deterministic nodes
//! enumerate legal moves, simulate each on a copied board, and keep the
//! first strictly best child. Chance nodes refill the one empty slot of
//! the hand that just played, once per distinct card in that side's deck,
//! and average the children by draw probability.
//!
//! Chance nodes cut off by comparing the running partial expectation with
//! alpha (our draw) or beta (their draw) as if it were final. This is not
//! a sound bound for expectation nodes and can discard probability mass
//! that would have moved the result. Deterministic levels prune exactly.

use std::time::Instant;

use log::{debug, trace};

use crate::board::BoardState;
use crate::cards::{Deck, Hand};
use crate::core::{Direction, Side};
use crate::rules::legal_moves;

use super::config::SearchConfig;
use super::node::NodeKind;
use super::response::{Move, Response};
use super::stats::SearchStats;

/// Everything the AI may look at when choosing a move.
///
/// Read once at entry; the search works on its own copies from then on.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    /// Live board.
    pub board: &'a BoardState,
    /// The acting side's hand.
    pub hand: Hand,
    /// The opponent's visible hand.
    pub opponent_hand: Hand,
    /// The acting side's remaining deck (composition only).
    pub deck: &'a Deck,
    /// The opponent's remaining deck (composition only).
    pub opponent_deck: &'a Deck,
}

/// Expectiminimax player for one side.
///
/// ## Example
///
/// ```
/// use joustus::board::{BoardState, GemCells};
/// use joustus::cards::{Catalog, Deck, Hand};
/// use joustus::core::Side;
/// use joustus::search::{Expectiminimax, SearchConfig, TurnView};
///
/// let catalog = Catalog::standard();
/// let mut mine = catalog.deal(Side::B, 6);
/// let mut theirs = catalog.deal(Side::A, 6);
/// let draw3 = |d: &mut Deck| Hand::new([d.draw(), d.draw(), d.draw()]);
/// let (hand, opponent_hand) = (draw3(&mut mine), draw3(&mut theirs));
///
/// let board = BoardState::new(GemCells::default());
/// let mut ai = Expectiminimax::new(Side::B, SearchConfig::default().with_depth(3));
/// let response = ai.consider_turn(&TurnView {
///     board: &board,
///     hand,
///     opponent_hand,
///     deck: &mine,
///     opponent_deck: &theirs,
/// });
/// assert!(response.play.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Expectiminimax {
    side: Side,
    config: SearchConfig,
    stats: SearchStats,
}

impl Expectiminimax {
    /// Create a searcher playing `side`.
    #[must_use]
    pub fn new(side: Side, config: SearchConfig) -> Self {
        Self {
            side,
            config,
            stats: SearchStats::default(),
        }
    }

    /// The side this searcher plays.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the last `consider_turn`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Static evaluation: our gems minus theirs, in [-3, 3].
    #[must_use]
    pub fn utility(&self, board: &BoardState) -> f32 {
        f32::from(board.gem_lead(self.side))
    }

    /// Choose a move for the side to act.
    ///
    /// With exactly one open cell left and a strict gem lead, fills that
    /// cell with the first card in hand and ends the game without
    /// searching. Otherwise runs the full search from a MAX root.
    pub fn consider_turn(&mut self, view: &TurnView<'_>) -> Response {
        let start = Instant::now();
        self.stats.reset();

        let response = match self.endgame_shortcut(view) {
            Some(response) => {
                self.stats.shortcut = true;
                debug!("{} closes the game at {:?}", self.side, response.play);
                response
            }
            None => self.search(view),
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{} chose {:?} (utility {:.3}) after {} nodes, {} cutoffs, {}us ({:.0} nodes/s)",
            self.side,
            response.play,
            response.utility,
            self.stats.nodes(),
            self.stats.cutoffs,
            self.stats.time_us,
            self.stats.nodes_per_second()
        );
        response
    }

    fn endgame_shortcut(&self, view: &TurnView<'_>) -> Option<Response> {
        if !self.config.endgame_shortcut {
            return None;
        }

        let mut empty = view.board.empty_cells();
        let cell = empty.next()?;
        if empty.next().is_some() || view.board.gems().contains(cell) {
            return None;
        }

        let lead = view.board.gem_lead(self.side);
        if lead <= 0 {
            return None;
        }

        let slot = view.hand.first_card_slot()?;
        Some(Response::with_move(
            Move::new(slot, cell, Direction::NoPush),
            f32::from(lead),
        ))
    }

    fn search(&mut self, view: &TurnView<'_>) -> Response {
        let root = Frame {
            board: view.board.copy_state(),
            ours: view.hand,
            theirs: view.opponent_hand,
            depth: self.config.depth,
        };

        let mut tree = Tree {
            side: self.side,
            config: &self.config,
            deck: view.deck,
            opponent_deck: view.opponent_deck,
            stats: &mut self.stats,
        };
        tree.expand(NodeKind::Max, &root, f32::NEG_INFINITY, f32::INFINITY)
    }
}

/// Position at one node: board copy, both hands, remaining depth.
#[derive(Clone, Copy)]
struct Frame {
    board: BoardState,
    ours: Hand,
    theirs: Hand,
    depth: u32,
}

/// Per-call search context.
struct Tree<'a> {
    side: Side,
    config: &'a SearchConfig,
    deck: &'a Deck,
    opponent_deck: &'a Deck,
    stats: &'a mut SearchStats,
}

impl Tree<'_> {
    fn expand(&mut self, kind: NodeKind, frame: &Frame, alpha: f32, beta: f32) -> Response {
        self.stats.record(kind);

        if frame.depth == 0 || frame.board.is_game_over() {
            return self.leaf(&frame.board);
        }

        if kind.is_chance() {
            self.chance(kind, frame, alpha, beta)
        } else {
            self.deterministic(kind, frame, alpha, beta)
        }
    }

    fn leaf(&mut self, board: &BoardState) -> Response {
        self.stats.leaves += 1;
        Response::value(f32::from(board.gem_lead(self.side)))
    }

    fn deterministic(&mut self, kind: NodeKind, frame: &Frame, mut alpha: f32, mut beta: f32) -> Response {
        let maximizing = kind == NodeKind::Max;
        let hand = if maximizing { frame.ours } else { frame.theirs };

        let moves = legal_moves(&hand, &frame.board);
        if moves.is_empty() {
            return self.leaf(&frame.board);
        }

        let next = kind.child(frame.depth == self.config.depth);
        let mut best = Response::value(if maximizing {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        });

        for (i, mv) in moves.iter().enumerate() {
            let card = hand.get(mv.slot).expect("generated move names an empty slot");
            let board = frame
                .board
                .with_move(card, mv.cell, mv.direction)
                .expect("generated move rejected by the board");

            let played = hand.without(mv.slot);
            let child = Frame {
                board,
                ours: if maximizing { played } else { frame.ours },
                theirs: if maximizing { frame.theirs } else { played },
                depth: frame.depth - 1,
            };
            let value = self.expand(next, &child, alpha, beta).utility;

            if maximizing {
                if value > best.utility {
                    best = Response::with_move(*mv, value);
                }
                alpha = alpha.max(value);
            } else {
                if value < best.utility {
                    best = Response::with_move(*mv, value);
                }
                beta = beta.min(value);
            }

            if self.config.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                trace!(
                    "{:?} cutoff at depth {} skips {} moves",
                    kind,
                    frame.depth,
                    moves.len() - i - 1
                );
                break;
            }
        }

        best
    }

    fn chance(&mut self, kind: NodeKind, frame: &Frame, mut alpha: f32, mut beta: f32) -> Response {
        let ours = kind.is_ours();
        let (hand, deck) = if ours {
            (frame.ours, self.deck)
        } else {
            (frame.theirs, self.opponent_deck)
        };
        let next = kind.child(false);

        // Nothing to draw into or from: the draw is certain to change nothing.
        let slot = match hand.first_empty_slot() {
            Some(slot) if !deck.is_empty() => slot,
            _ => {
                let child = Frame {
                    depth: frame.depth - 1,
                    ..*frame
                };
                return Response::value(self.expand(next, &child, alpha, beta).utility);
            }
        };

        let outcomes = deck.outcomes();
        let mut expectation = 0.0f32;

        for (i, (card, probability)) in outcomes.iter().enumerate() {
            let mut drawn = hand;
            drawn.put(slot, card.face_up());

            let child = Frame {
                board: frame.board,
                ours: if ours { drawn } else { frame.ours },
                theirs: if ours { frame.theirs } else { drawn },
                depth: frame.depth - 1,
            };
            let value = self.expand(next, &child, alpha, beta).utility;
            expectation += value * probability;

            if ours {
                alpha = alpha.max(expectation);
            } else {
                beta = beta.min(expectation);
            }

            if self.config.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                trace!(
                    "{:?} cutoff at depth {} skips {} draws",
                    kind,
                    frame.depth,
                    outcomes.len() - i - 1
                );
                break;
            }
        }

        Response::value(expectation)
    }
}
