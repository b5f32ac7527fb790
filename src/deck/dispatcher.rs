//! Outcome dispatch for settled commit animations.

use super::gesture::Gesture;
use crate::models::SwipeOutcome;

/// Emits the outcome of a settled gesture to the host.
///
/// The dispatcher keeps no "already handled" memory of its own: the
/// at-most-once guarantee comes from the gesture's own latch, which is
/// created with the gesture and dies with it.
#[derive(Debug, Default)]
pub struct OutcomeDispatcher {
    emitted: u64,
    dropped: u64,
}

impl OutcomeDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `gesture`'s outcome if it has not been emitted yet.
    pub fn dispatch(&mut self, gesture: &mut Gesture) -> Option<SwipeOutcome> {
        match gesture.take_outcome() {
            Some(outcome) => {
                self.emitted += 1;
                tracing::info!(
                    gesture = %gesture.id(),
                    photo_id = outcome.photo().id,
                    direction = ?outcome.direction(),
                    "Swipe outcome dispatched"
                );
                Some(outcome)
            }
            None => {
                self.record_duplicate();
                None
            }
        }
    }

    /// Note a completion that arrived for a gesture that already resolved.
    pub fn record_duplicate(&mut self) {
        self.dropped += 1;
        tracing::debug!(dropped = self.dropped, "Duplicate completion ignored");
    }

    /// Outcomes emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Completions dropped as duplicates so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
