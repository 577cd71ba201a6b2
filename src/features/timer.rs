//! Cancellable repeating timer handle
//!
//! The timer itself is driven by the host (an iced `time::every` subscription).
//! This type only owns the single live handle: ticks are accepted while their
//! [`TimerId`] matches the live one, so a tick that was already queued when the
//! timer got cancelled is rejected instead of mutating state.

use std::time::Duration;

/// Identity of one started run of a [`RepeatingTimer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    /// Last id handed out; ids are never reused within one timer
    last_id: u64,
    live: Option<TimerId>,
}

impl RepeatingTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_id: 0,
            live: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start a run. Returns `None` if a run is already live (no second timer).
    pub fn start(&mut self) -> Option<TimerId> {
        if self.live.is_some() {
            return None;
        }
        self.last_id += 1;
        let id = TimerId(self.last_id);
        self.live = Some(id);
        Some(id)
    }

    /// Cancel the live run, if any. Idempotent.
    ///
    /// Returns `true` only for the call that actually cancelled something.
    pub fn cancel(&mut self) -> bool {
        self.live.take().is_some()
    }

    pub fn live(&self) -> Option<TimerId> {
        self.live
    }

    /// Whether a tick carrying `id` belongs to the live run
    pub fn accepts(&self, id: TimerId) -> bool {
        self.live == Some(id)
    }
}
