//! # Resize Debouncing
//!
//! Terminals (and browsers) fire resize notifications in bursts. The host
//! coalesces a burst into one trailing recalculation once the size has been
//! stable for `delay`. The engine itself does not care how often it runs;
//! this only saves work.
//!
//! Time is passed in explicitly so the policy is testable without sleeping.

use std::time::{Duration, Instant};

/// Default quiet period before recalculating after a resize.
pub const DEFAULT_RESIZE_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug)]
pub struct ResizeDebouncer {
    delay: Duration,
    last_trigger: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_trigger: None,
        }
    }

    /// Records a resize notification, restarting the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        self.last_trigger = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// True once per burst, when the quiet period has elapsed. Consumes the
    /// pending trigger.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.last_trigger {
            Some(at) if now.saturating_duration_since(at) >= self.delay => {
                self.last_trigger = None;
                true
            }
            _ => false,
        }
    }

    /// How long the host may wait before the pending call is due.
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.last_trigger
            .map(|at| self.delay.saturating_sub(now.saturating_duration_since(at)))
    }
}
