//! Card instances - runtime card state.
//!
//! A `Card` pairs an immutable identity (board index and face) with the
//! two flags the game mutates: `revealed` and `matched`. Only the engine
//! flips those flags; everyone else reads them.

use serde::{Deserialize, Serialize};

use super::definition::{CardIndex, FaceId};

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    index: CardIndex,
    face: FaceId,
    revealed: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(index: CardIndex, face: FaceId) -> Self {
        Self {
            index,
            face,
            revealed: false,
            matched: false,
        }
    }

    /// Stable board index.
    #[must_use]
    pub fn index(&self) -> CardIndex {
        self.index
    }

    /// Face value.
    #[must_use]
    pub fn face(&self) -> FaceId {
        self.face
    }

    /// Revealed as part of the current selection.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Part of a found pair.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Whether a renderer should show the face.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    /// Whether the card can still be picked.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn hide(&mut self) {
        self.revealed = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }
}
