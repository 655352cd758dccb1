//! Results of engine operations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;

/// Why a selection was ignored.
///
/// Guards are checked in declaration order; the first that applies is
/// reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A mismatched pair is on display.
    Locked,
    /// Two cards are already revealed.
    SelectionFull,
    /// The card is already revealed.
    AlreadyRevealed,
    /// The card is already part of a found pair.
    AlreadyMatched,
}

/// Result of `GameEngine::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),

    /// First card of a pair turned face up.
    Revealed(CardIndex),

    /// Second card matched the first.
    Matched { first: CardIndex, second: CardIndex },

    /// Second card matched the first and completed the board.
    Won {
        first: CardIndex,
        second: CardIndex,
        moves: u32,
    },

    /// Second card differs; both flip back after `flip_back_in`.
    Mismatched {
        first: CardIndex,
        second: CardIndex,
        flip_back_in: Duration,
    },
}

impl SelectOutcome {
    /// True when the selection was a no-op.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// True when the selection completed a pair comparison.
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            SelectOutcome::Matched { .. } | SelectOutcome::Won { .. } | SelectOutcome::Mismatched { .. }
        )
    }

    /// True when the selection found a pair.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. } | SelectOutcome::Won { .. })
    }
}

/// Result of `GameEngine::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Applied {
    /// A card selection.
    Select(SelectOutcome),
    /// A new round started.
    Reset { generation: u64 },
    /// The clock moved; `fired` deferred tasks ran.
    Advanced { fired: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        let ignored = SelectOutcome::Ignored(IgnoreReason::Locked);
        assert!(ignored.is_ignored());
        assert!(!ignored.is_resolution());

        let revealed = SelectOutcome::Revealed(CardIndex::new(0));
        assert!(!revealed.is_ignored());
        assert!(!revealed.is_resolution());

        let matched = SelectOutcome::Matched {
            first: CardIndex::new(0),
            second: CardIndex::new(1),
        };
        assert!(matched.is_resolution());
        assert!(matched.is_match());

        let mismatched = SelectOutcome::Mismatched {
            first: CardIndex::new(0),
            second: CardIndex::new(1),
            flip_back_in: Duration::from_secs(1),
        };
        assert!(mismatched.is_resolution());
        assert!(!mismatched.is_match());
    }
}
