//! Game rules.
//!
//! `GameEngine` is the whole state machine:
//!
//! ```text
//! accepting --(mismatch)--> locked --(flip-back due)--> accepting
//! ```
//!
//! with a `won` flag that is set by the match that completes the board.

pub mod engine;
pub mod outcome;

pub use engine::GameEngine;
pub use outcome::{Applied, IgnoreReason, SelectOutcome};
