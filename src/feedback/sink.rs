//! Feedback sinks.
//!
//! - [`FeedbackLog`]: records every signal (the default; handy for tests)
//! - [`CueSink`]: resolves each signal to its sound cue and hands the asset
//!   key to a playback closure
//! - [`NullSink`]: drops everything
//!
//! Any `FnMut(Feedback)` closure is also a sink.

use super::Feedback;
use crate::core::config::{GameConfig, SoundCues};

/// Receiver of engine feedback.
pub trait FeedbackSink {
    /// Deliver one signal.
    fn emit(&mut self, feedback: Feedback);
}

impl<F> FeedbackSink for F
where
    F: FnMut(Feedback),
{
    fn emit(&mut self, feedback: Feedback) {
        self(feedback);
    }
}

/// Sink that records every signal in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackLog {
    signals: Vec<Feedback>,
}

impl FeedbackLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals recorded so far.
    #[must_use]
    pub fn signals(&self) -> &[Feedback] {
        &self.signals
    }

    /// Most recent signal.
    #[must_use]
    pub fn last(&self) -> Option<Feedback> {
        self.signals.last().copied()
    }

    /// Take all recorded signals, leaving the log empty.
    pub fn drain(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.signals)
    }
}

impl FeedbackSink for FeedbackLog {
    fn emit(&mut self, feedback: Feedback) {
        self.signals.push(feedback);
    }
}

/// Sink that drops every signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn emit(&mut self, _feedback: Feedback) {}
}

/// Sink that plays the configured sound cue for each signal.
///
/// ```
/// use memory_match::core::SoundCues;
/// use memory_match::feedback::{CueSink, Feedback, FeedbackSink};
///
/// let mut played = Vec::new();
/// let mut sink = CueSink::new(SoundCues::default(), |cue: &str| played.push(cue.to_string()));
/// sink.emit(Feedback::Win);
/// drop(sink);
/// assert_eq!(played, vec!["Win.wav"]);
/// ```
pub struct CueSink<P> {
    cues: SoundCues,
    play: P,
}

impl<P> CueSink<P>
where
    P: FnMut(&str),
{
    /// Create a sink over the given cues and playback closure.
    pub fn new(cues: SoundCues, play: P) -> Self {
        Self { cues, play }
    }

    /// Create a sink playing the cues from `config`.
    pub fn from_config(config: &GameConfig, play: P) -> Self {
        Self::new(config.cues.clone(), play)
    }

    /// The configured cues.
    #[must_use]
    pub fn cues(&self) -> &SoundCues {
        &self.cues
    }
}

impl<P> FeedbackSink for CueSink<P>
where
    P: FnMut(&str),
{
    fn emit(&mut self, feedback: Feedback) {
        (self.play)(feedback.cue(&self.cues));
    }
}
