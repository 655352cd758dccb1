//! Engine actions and action history.
//!
//! Every input that reaches the engine is an `Action`: pick a card, start a
//! new round, or let time pass. The engine records each applied action so a
//! round can be replayed from its seed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;

/// An input to the engine.
///
/// ```
/// use memory_match::cards::CardIndex;
/// use memory_match::core::Action;
/// use std::time::Duration;
///
/// let pick = Action::Select(CardIndex::new(5));
/// let reset = Action::Reset;
/// let tick = Action::Advance(Duration::from_millis(16));
/// assert_ne!(pick, reset);
/// assert!(tick.is_clock());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Reveal the card at this index.
    Select(CardIndex),
    /// Throw the round away and deal a new deck.
    Reset,
    /// Advance the engine clock.
    Advance(Duration),
}

impl Action {
    /// True for clock ticks.
    #[must_use]
    pub fn is_clock(&self) -> bool {
        matches!(self, Action::Advance(_))
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay from the round's seed
/// - Debugging stale-timer reports
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Round generation the action was applied in.
    pub generation: u64,

    /// Sequence number within the engine's lifetime.
    pub sequence: u64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, generation: u64, sequence: u64) -> Self {
        Self {
            action,
            generation,
            sequence,
        }
    }
}
