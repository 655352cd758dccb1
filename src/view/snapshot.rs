//! Engine snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::{CardIndex, FaceId, FaceRegistry};
use crate::core::state::GameState;

/// Render view of one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Clickable identity.
    pub index: CardIndex,
    /// Face value.
    pub face: FaceId,
    /// Face asset key.
    pub asset: String,
    /// Revealed in the current selection.
    pub revealed: bool,
    /// Part of a found pair.
    pub matched: bool,
    /// Show the face (`revealed || matched`).
    pub face_up: bool,
    /// Cannot be clicked any more (`matched`).
    pub disabled: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cards: Vec<CardView>,
    pub selection: Vec<CardIndex>,
    pub move_count: u32,
    pub locked: bool,
    pub won: bool,
}

impl Snapshot {
    /// Build a snapshot of `state`, resolving faces through `registry`.
    #[must_use]
    pub fn capture(state: &GameState, registry: &FaceRegistry) -> Self {
        let cards = state
            .deck()
            .iter()
            .map(|card| CardView {
                index: card.index(),
                face: card.face(),
                asset: registry.asset(card.face()).unwrap_or_default().to_string(),
                revealed: card.is_revealed(),
                matched: card.is_matched(),
                face_up: card.is_face_up(),
                disabled: card.is_matched(),
            })
            .collect();

        Self {
            cards,
            selection: state.selection().to_vec(),
            move_count: state.move_count(),
            locked: state.is_locked(),
            won: state.is_won(),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Counter text.
    #[must_use]
    pub fn moves_label(&self) -> String {
        format!("Moves: {}", self.move_count)
    }

    /// Congratulation text once the game is won.
    #[must_use]
    pub fn win_message(&self) -> Option<String> {
        self.won.then(|| {
            format!(
                "You won in {} moves! Press reset to play again.",
                self.move_count
            )
        })
    }
}
