//! Feedback signals.
//!
//! The engine reports the outcome of each resolution through one of three
//! abstract signals. How a signal is presented (a sound, a flash, nothing)
//! is up to the `FeedbackSink` the host attaches.

mod sink;

pub use sink::{CueSink, FeedbackLog, FeedbackSink, NullSink};

use serde::{Deserialize, Serialize};

use crate::core::config::SoundCues;

/// Outcome signal emitted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// The two revealed cards matched.
    Correct,
    /// The two revealed cards differ.
    Incorrect,
    /// The last pair was found.
    Win,
}

impl Feedback {
    /// Sound cue asset key for this signal.
    #[must_use]
    pub fn cue(self, cues: &SoundCues) -> &str {
        match self {
            Feedback::Correct => &cues.correct,
            Feedback::Incorrect => &cues.incorrect,
            Feedback::Win => &cues.win,
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Feedback::Correct => "correct",
            Feedback::Incorrect => "incorrect",
            Feedback::Win => "win",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_lookup() {
        let cues = SoundCues::default();

        assert_eq!(Feedback::Correct.cue(&cues), "True.mp3");
        assert_eq!(Feedback::Incorrect.cue(&cues), "False.mp3");
        assert_eq!(Feedback::Win.cue(&cues), "Win.wav");
    }

    #[test]
    fn test_display() {
        assert_eq!(Feedback::Correct.to_string(), "correct");
        assert_eq!(Feedback::Win.to_string(), "win");
    }
}
