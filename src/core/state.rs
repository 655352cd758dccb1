//! Game state for one round.
//!
//! `GameState` owns the deck and the round's bookkeeping:
//! - `selection`: up to two revealed-but-unresolved card indices, in click order
//! - `move_count`: completed pair comparisons
//! - `locked`: a mismatched pair is on display awaiting flip-back
//! - `won`: every card is matched
//!
//! A new round replaces the whole value; nothing from a previous deck
//! survives `initialize` or `reset`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardIndex, Deck};

/// Maximum cards revealed at once.
pub const MAX_SELECTION: usize = 2;

/// Indices revealed and awaiting resolution.
pub type Selection = SmallVec<[CardIndex; MAX_SELECTION]>;

/// Complete state of one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    deck: Deck,
    selection: Selection,
    move_count: u32,
    locked: bool,
    won: bool,
}

impl GameState {
    /// Fresh state around a new deck, counters zeroed.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            selection: SmallVec::new(),
            move_count: 0,
            locked: false,
            won: false,
        }
    }

    /// The deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Get a card by index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.deck.get(index)
    }

    /// Current selection in click order.
    #[must_use]
    pub fn selection(&self) -> &[CardIndex] {
        &self.selection
    }

    /// Completed pair comparisons this round.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// True while a mismatched pair awaits flip-back.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// True once every card is matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// True when the selection holds a full pair.
    #[must_use]
    pub fn selection_full(&self) -> bool {
        self.selection.len() >= MAX_SELECTION
    }

    // === Engine mutation ===

    pub(crate) fn reveal(&mut self, index: CardIndex) {
        if let Some(card) = self.deck.get_mut(index) {
            card.reveal();
            self.selection.push(index);
        }
    }

    /// Take the full selection, if it holds a pair.
    pub(crate) fn pending_pair(&self) -> Option<(CardIndex, CardIndex)> {
        match self.selection.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    pub(crate) fn count_move(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn mark_matched(&mut self, first: CardIndex, second: CardIndex) {
        for index in [first, second] {
            if let Some(card) = self.deck.get_mut(index) {
                card.mark_matched();
            }
        }
        self.selection.clear();
    }

    /// Record a win if every card is matched. Returns the new flag.
    pub(crate) fn check_won(&mut self) -> bool {
        if self.deck.all_matched() {
            self.won = true;
        }
        self.won
    }

    pub(crate) fn lock(&mut self) {
        self.locked = true;
    }

    /// Flip a mismatched pair back face down and unlock.
    pub(crate) fn flip_back(&mut self, first: CardIndex, second: CardIndex) {
        for index in [first, second] {
            if let Some(card) = self.deck.get_mut(index) {
                card.hide();
            }
        }
        self.selection.clear();
        self.locked = false;
    }
}
