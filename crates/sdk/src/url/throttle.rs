//! Trailing-edge throttle that keeps only the latest value

use std::time::Duration;
use tokio::time::Instant;

/// Coalesces values pushed within `delay` of the first one into a single
/// flush carrying the most recent value.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    delay: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Throttle<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `value`, replacing anything still pending. The first push of a
    /// window schedules the flush.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        if self.deadline.is_none() {
            self.deadline = Some(now + self.delay);
        }
    }

    /// Take the pending value once its flush is due
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value and its scheduled flush
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }
}
