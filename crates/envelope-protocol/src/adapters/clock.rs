//! Clock Adapters
//!
//! Implements the `Clock` port for production and tests.

use crate::ports::Clock;
use parking_lot::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time source.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Manually advanced time source for tests.
pub struct ManualClock {
    current_time: RwLock<u64>,
}

impl ManualClock {
    /// Create a clock starting at the given Unix time.
    pub fn new(start: u64) -> Self {
        Self {
            current_time: RwLock::new(start),
        }
    }

    /// Set current time.
    pub fn set_time(&self, time: u64) {
        *self.current_time.write() = time;
    }

    /// Advance time by `secs`.
    pub fn advance_time(&self, secs: u64) {
        *self.current_time.write() += secs;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        *self.current_time.read()
    }
}
