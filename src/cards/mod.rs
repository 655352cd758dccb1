//! Card system: faces, cards and decks.
//!
//! ## Key Types
//!
//! - `FaceId`: Identifier for a face value (two cards share each face)
//! - `CardIndex`: Stable board position of a card
//! - `Card`: Runtime card state (revealed, matched)
//! - `Deck`: Ordered cards, exactly two per face
//! - `FaceRegistry`: Face asset key lookup

pub mod definition;
pub mod deck;
pub mod instance;
pub mod registry;

pub use deck::{Deck, COPIES_PER_FACE};
pub use definition::{CardIndex, FaceId};
pub use instance::Card;
pub use registry::FaceRegistry;
