//! Deferred actions on a logical clock.
//!
//! The engine has exactly one kind of asynchrony: after a mismatch the two
//! cards stay visible for a fixed delay, then flip back. This module holds
//! such deferred tasks until the host advances the clock past their due time.
//!
//! ## Stale tasks
//!
//! Every task is stamped with the round generation that scheduled it. When
//! a round is replaced the engine both cancels the queue and bumps its
//! generation, and it refuses to run any task whose stamp no longer matches.
//! A flip-back from an old deck therefore never touches a new one.

mod timer;

pub use timer::{Scheduled, Scheduler, TimerId};

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;

/// Work deferred until a deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeferredTask {
    /// Turn a mismatched pair face down and unlock the board.
    FlipBack {
        first: CardIndex,
        second: CardIndex,
    },
}
