//! One-shot deadlines.
//!
//! The tick interval changes whenever the snake eats, so ticks are never a
//! fixed-rate interval: each tick arms a fresh one-shot deadline with the
//! current speed. Cancelling clears the deadline so nothing stale can fire.

/// A single armed-or-idle deadline on the controller's clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    due_ms: Option<u64>,
}

impl Deadline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) to fire `delay_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Consume the deadline if it is due at `now_ms`.
    ///
    /// Returns true at most once per arming.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if due <= now_ms => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of several optional deadlines.
pub fn earliest(deadlines: &[Deadline]) -> Option<u64> {
    deadlines.iter().filter_map(|d| d.due_ms()).min()
}
