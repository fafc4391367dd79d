// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable payload timestamps

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A clock that provides the current time in Unix milliseconds
pub trait Clock: Clone + Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Real wall clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<i64>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(0)
    }

    /// Start the clock at a specific time
    pub fn at(ms: i64) -> Self {
        Self {
            current: Arc::new(Mutex::new(ms)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let ms = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        self.advance_ms(ms);
    }

    pub fn advance_ms(&self, ms: i64) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = current.saturating_add(ms);
    }

    /// Set the clock to a specific time
    pub fn set(&self, ms: i64) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = ms;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> i64 {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
