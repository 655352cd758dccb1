//! The game engine.
//!
//! `GameEngine` owns one round of `GameState` plus everything needed to
//! start the next: configuration, face registry and RNG. All mutation goes
//! through `&mut self`, so each operation runs to completion before the next
//! one starts.
//!
//! ## Example
//!
//! ```
//! use memory_match::cards::FaceId;
//! use memory_match::core::GameConfig;
//! use memory_match::rules::{GameEngine, SelectOutcome};
//! use std::time::Duration;
//!
//! let config = GameConfig::new().with_faces(["A", "B"]);
//! let mut engine = GameEngine::new(config).unwrap();
//! let (a, b) = (FaceId::new(0), FaceId::new(1));
//! engine.initialize_with_layout(&[a, b, a, b]).unwrap();
//!
//! engine.select_card(0).unwrap();
//! let outcome = engine.select_card(1).unwrap();
//! assert!(matches!(outcome, SelectOutcome::Mismatched { .. }));
//! assert!(engine.state().is_locked());
//!
//! engine.advance(Duration::from_secs(1));
//! assert!(!engine.state().is_locked());
//! assert_eq!(engine.state().move_count(), 1);
//! ```

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, warn};

use super::outcome::{Applied, IgnoreReason, SelectOutcome};
use crate::cards::{CardIndex, Deck, FaceId, FaceRegistry};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::GameConfig;
use crate::core::error::{EngineError, Result};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::feedback::{Feedback, FeedbackLog, FeedbackSink};
use crate::schedule::{DeferredTask, Scheduler};
use crate::view::Snapshot;

/// Memory game engine.
///
/// `S` receives feedback signals; the default [`FeedbackLog`] records them.
pub struct GameEngine<S = FeedbackLog> {
    config: GameConfig,
    registry: FaceRegistry,
    rng: GameRng,
    state: GameState,
    scheduler: Scheduler,
    /// Round counter; bumped by every `initialize`.
    generation: u64,
    history: Vector<ActionRecord>,
    sequence: u64,
    sink: S,
}

impl GameEngine<FeedbackLog> {
    /// Create an engine and deal the first round.
    ///
    /// Feedback is recorded in a [`FeedbackLog`].
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_sink(config, FeedbackLog::new())
    }
}

impl<S: FeedbackSink> GameEngine<S> {
    /// Create an engine delivering feedback to `sink` and deal the first round.
    pub fn with_sink(config: GameConfig, sink: S) -> Result<Self> {
        config.validate()?;
        let registry = FaceRegistry::from_config(&config)?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut engine = Self {
            config,
            registry,
            rng,
            state: GameState::default(),
            scheduler: Scheduler::new(),
            generation: 0,
            history: Vector::new(),
            sequence: 0,
            sink,
        };
        engine.initialize();
        Ok(engine)
    }

    // === Rounds ===

    /// Deal a freshly shuffled deck and zero every counter.
    ///
    /// Any pending flip-back from the previous round is cancelled.
    pub fn initialize(&mut self) {
        let deck = Deck::shuffled(&self.registry, &mut self.rng);
        self.start_round(deck);
    }

    /// Start a round with a fixed face layout instead of a shuffle.
    ///
    /// The layout must hold every configured face exactly twice. On error
    /// the current round is left untouched.
    pub fn initialize_with_layout(&mut self, layout: &[FaceId]) -> Result<()> {
        let deck = Deck::from_layout(layout, &self.registry)?;
        self.start_round(deck);
        Ok(())
    }

    /// Throw the current round away and deal a new one.
    pub fn reset(&mut self) {
        self.initialize();
    }

    fn start_round(&mut self, deck: Deck) {
        let cancelled = self.scheduler.cancel_all();
        self.generation += 1;
        self.state = GameState::new(deck);

        info!(
            generation = self.generation,
            cards = self.state.deck().len(),
            cancelled,
            "round started"
        );
    }

    // === Selection ===

    /// Try to turn the card at `index` face up.
    ///
    /// Returns `Err(InvalidIndex)` for an index outside the deck. Selecting
    /// while locked, with two cards already up, or on a revealed or matched
    /// card is a no-op reported as `SelectOutcome::Ignored`.
    pub fn select_card(&mut self, index: impl Into<CardIndex>) -> Result<SelectOutcome> {
        let index = index.into();
        let len = self.state.deck().len();
        let Some(card) = self.state.card(index) else {
            warn!(index = index.0, len, "card index out of range");
            return Err(EngineError::InvalidIndex { index: index.0, len });
        };

        let ignored = if self.state.is_locked() {
            Some(IgnoreReason::Locked)
        } else if self.state.selection_full() {
            Some(IgnoreReason::SelectionFull)
        } else if card.is_revealed() {
            Some(IgnoreReason::AlreadyRevealed)
        } else if card.is_matched() {
            Some(IgnoreReason::AlreadyMatched)
        } else {
            None
        };
        if let Some(reason) = ignored {
            debug!(index = index.0, ?reason, "selection ignored");
            return Ok(SelectOutcome::Ignored(reason));
        }

        self.state.reveal(index);
        debug!(index = index.0, "card revealed");

        match self.state.pending_pair() {
            Some((first, second)) => Ok(self.resolve(first, second)),
            None => Ok(SelectOutcome::Revealed(index)),
        }
    }

    /// Compare a full selection. Runs exactly once per pair.
    fn resolve(&mut self, first: CardIndex, second: CardIndex) -> SelectOutcome {
        self.state.count_move();
        let moves = self.state.move_count();

        let same_face = match (self.state.card(first), self.state.card(second)) {
            (Some(a), Some(b)) => a.face() == b.face(),
            _ => false,
        };

        if same_face {
            self.state.mark_matched(first, second);
            debug!(first = first.0, second = second.0, moves, "pair matched");
            self.sink.emit(Feedback::Correct);

            if self.state.check_won() {
                info!(generation = self.generation, moves, "board cleared");
                self.sink.emit(Feedback::Win);
                return SelectOutcome::Won { first, second, moves };
            }
            return SelectOutcome::Matched { first, second };
        }

        self.state.lock();
        debug!(first = first.0, second = second.0, moves, "pair mismatched");
        self.sink.emit(Feedback::Incorrect);

        let delay = self.config.flip_back_delay;
        self.scheduler
            .schedule(delay, self.generation, DeferredTask::FlipBack { first, second });

        SelectOutcome::Mismatched {
            first,
            second,
            flip_back_in: delay,
        }
    }

    // === Clock ===

    /// Advance the engine clock, running deferred tasks that became due.
    ///
    /// Returns how many tasks ran. Tasks scheduled by an earlier round are
    /// dropped without touching the current deck.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let mut fired = 0;
        for scheduled in self.scheduler.advance(elapsed) {
            if scheduled.generation != self.generation {
                debug!(
                    timer = scheduled.id.0,
                    scheduled_in = scheduled.generation,
                    current = self.generation,
                    "dropping stale deferred task"
                );
                continue;
            }

            match scheduled.task {
                DeferredTask::FlipBack { first, second } => {
                    self.state.flip_back(first, second);
                    debug!(first = first.0, second = second.0, "mismatched pair flipped back");
                }
            }
            fired += 1;
        }
        fired
    }

    /// Time until the next deferred task is due, if one is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Current engine clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    // === Dispatch ===

    /// Apply an input action and record it in the history.
    ///
    /// Failed actions are not recorded, and neither are clock ticks that ran
    /// nothing, so a host ticking every frame does not grow the history.
    pub fn apply(&mut self, action: Action) -> Result<Applied> {
        let generation = self.generation;
        let applied = match action {
            Action::Select(index) => Applied::Select(self.select_card(index)?),
            Action::Reset => {
                self.reset();
                Applied::Reset {
                    generation: self.generation,
                }
            }
            Action::Advance(elapsed) => Applied::Advanced {
                fired: self.advance(elapsed),
            },
        };

        if action.is_clock() && applied == (Applied::Advanced { fired: 0 }) {
            return Ok(applied);
        }

        self.history
            .push_back(ActionRecord::new(action, generation, self.sequence));
        self.sequence += 1;
        Ok(applied)
    }

    // === Views ===

    /// Read-only view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.registry)
    }

    /// Current round state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Face registry.
    #[must_use]
    pub fn registry(&self) -> &FaceRegistry {
        &self.registry
    }

    /// Current round number, starting at 1.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seed of the shuffle RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Feedback sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable feedback sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the engine, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
