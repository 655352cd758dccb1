//! # memory-match
//!
//! Game-state engine for a memory-matching card game: a grid of face-down
//! cards is revealed two at a time, matching pairs stay up, mismatches flip
//! back after a short delay.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: All state lives in one `GameEngine`; every mutation
//!    takes `&mut self` and runs to completion.
//!
//! 2. **Deterministic**: Shuffles come from a seeded ChaCha8 RNG and time
//!    only moves when the host calls `advance`, so any game can be replayed.
//!
//! 3. **Collaborators at the Edges**: Drawing, sound and event wiring sit
//!    behind `Renderer`, `FeedbackSink` and `UiEvent`; the engine knows none
//!    of them.
//!
//! ## Stale Timers
//!
//! A mismatch schedules a flip-back on the engine clock. Each scheduled
//! task carries the round generation it belongs to, and starting a new
//! round cancels the queue, so a flip-back can never land on a newer deck.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG, actions, round state
//! - `cards`: faces, cards, decks
//! - `rules`: the `GameEngine` state machine
//! - `schedule`: deferred tasks on a logical clock
//! - `feedback`: correct / incorrect / win signals and sinks
//! - `view`: snapshots and renderers
//! - `input`: UI event translation

pub mod core;
pub mod cards;
pub mod rules;
pub mod schedule;
pub mod feedback;
pub mod view;
pub mod input;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    EngineError, Result,
    GameConfig, SoundCues,
    GameRng,
    GameState, Selection,
};

pub use crate::cards::{Card, CardIndex, Deck, FaceId, FaceRegistry};

pub use crate::rules::{Applied, GameEngine, IgnoreReason, SelectOutcome};

pub use crate::schedule::{DeferredTask, Scheduled, Scheduler, TimerId};

pub use crate::feedback::{CueSink, Feedback, FeedbackLog, FeedbackSink, NullSink};

pub use crate::view::{CardView, Renderer, Snapshot, TextRenderer};

pub use crate::input::{translate, InputAdapter, UiEvent};
