//! Face and card identifiers.
//!
//! `FaceId` identifies a face value (the image two cards share).
//! `CardIndex` is a card's stable position on the board, `0..2K`.

use serde::{Deserialize, Serialize};

/// Identifier for a face value.
///
/// Faces are numbered in configuration order; the `FaceRegistry` maps
/// them to external asset keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// Stable identity of a card on the board.
///
/// Equal to the card's position in the deck. Renderers expose it as the
/// clickable identity of the card element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub usize);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl From<usize> for CardIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
