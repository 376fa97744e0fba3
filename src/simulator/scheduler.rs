//! Minimal clock-driven queue for deferred engine actions.

use crate::round::{DeferredAction, PuzzleEngine};
use std::time::Duration;

/// Holds deferred actions until their delay has elapsed on a caller-owned clock.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    pending: Vec<(Duration, DeferredAction)>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` relative to the current clock reading `now`.
    pub fn push(&mut self, now: Duration, action: DeferredAction) {
        let due = now + action.delay;
        self.pending.push((due, action));
    }

    /// Fire every action due at or before `now`, oldest first.
    /// Returns how many actually changed engine state.
    pub fn fire_due(&mut self, engine: &mut PuzzleEngine, now: Duration) -> usize {
        self.pending.sort_by_key(|(due, _)| *due);
        let split = self.pending.partition_point(|(due, _)| *due <= now);
        self.pending
            .drain(..split)
            .filter(|(_, action)| engine.fire_deferred(action))
            .count()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
