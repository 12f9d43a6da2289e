use std::time::{Duration, Instant};

use crate::layout::Viewport;

/// Collapses bursts of resize notifications into a single relayout.
///
/// Each notification supersedes any earlier pending one and restarts the
/// quiet-period timer, so at most one relayout is ever pending and only the
/// most recent geometry within a burst is acted on. The caller polls
/// [`fire`](Self::fire) (typically from the event loop's about-to-wait hook)
/// and sleeps until [`deadline`](Self::deadline) when nothing is due yet.
#[derive(Debug)]
pub struct RelayoutDebouncer {
    delay: Duration,
    pending: Option<(Instant, Viewport)>,
}

impl RelayoutDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a resize notification, replacing any pending one.
    pub fn notify(&mut self, viewport: Viewport, now: Instant) {
        self.pending = Some((now + self.delay, viewport));
    }

    /// Deadline of the pending relayout, if one is scheduled.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(deadline, _)| deadline)
    }

    /// Takes the pending viewport once its quiet period has elapsed.
    pub fn fire(&mut self, now: Instant) -> Option<Viewport> {
        match self.pending {
            Some((deadline, viewport)) if now >= deadline => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }
}
