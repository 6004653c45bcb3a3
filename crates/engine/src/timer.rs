//! Gravity timer - a cancellable fixed-interval countdown.
//!
//! The timer never reads a clock. The host reports elapsed milliseconds and
//! the session asks how long until the next fire.

/// Fixed-interval countdown that can be armed, disarmed and re-armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityTimer {
    cadence_ms: u32,
    elapsed_ms: u32,
    armed: bool,
}

impl GravityTimer {
    /// A disarmed timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm with a fresh interval. Any partial elapsed time is discarded.
    pub fn arm(&mut self, cadence_ms: u32) {
        self.cadence_ms = cadence_ms.max(1);
        self.elapsed_ms = 0;
        self.armed = true;
    }

    /// Cancel; nothing fires until armed again.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn cadence_ms(&self) -> u32 {
        self.cadence_ms
    }

    /// Time left in the current interval, `None` when disarmed
    pub fn remaining_ms(&self) -> Option<u32> {
        self.armed
            .then(|| self.cadence_ms.saturating_sub(self.elapsed_ms))
    }

    /// Record elapsed time that does not reach the next fire.
    pub(crate) fn elapse(&mut self, ms: u32) {
        if self.armed {
            self.elapsed_ms = self.elapsed_ms.saturating_add(ms).min(self.cadence_ms);
        }
    }

    /// Begin the next interval after a fire, keeping the cadence.
    pub(crate) fn rewind(&mut self) {
        self.elapsed_ms = 0;
    }
}
