//! Logical-clock scheduler.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::DeferredTask;

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// A task waiting for its deadline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled {
    /// Handle returned by `schedule`.
    pub id: TimerId,
    /// Round generation that scheduled the task.
    pub generation: u64,
    /// Clock reading at which the task is due.
    pub due: Duration,
    /// The deferred work.
    pub task: DeferredTask,
}

/// Queue of deferred tasks driven by `advance`.
///
/// The clock only moves when the host calls `advance`, which keeps the
/// engine deterministic and lets tests step time exactly.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to run `delay` from now.
    pub fn schedule(&mut self, delay: Duration, generation: u64, task: DeferredTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let due = self.now.saturating_add(delay);
        // Keep the queue ordered by deadline, FIFO among equal deadlines.
        let at = self.pending.partition_point(|s| s.due <= due);
        self.pending.insert(
            at,
            Scheduled {
                id,
                generation,
                due,
                task,
            },
        );
        id
    }

    /// Cancel every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Move the clock forward and take every task that is now due,
    /// earliest first.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Scheduled> {
        self.now = self.now.saturating_add(elapsed);
        let due = self.pending.partition_point(|s| s.due <= self.now);
        self.pending.drain(..due).collect()
    }

    /// Time left until the earliest pending task, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .first()
            .map(|s| s.due.saturating_sub(self.now))
    }

    /// Pending tasks, earliest first.
    #[must_use]
    pub fn pending(&self) -> &[Scheduled] {
        &self.pending
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
