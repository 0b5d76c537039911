// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time abstraction for deterministic replay.
//!
//! The dispatcher stamps record timestamps and sleeps out replay delays
//! through a `Clock`, so tests drive a `FakeClock` instead of wall time.

use chrono::{DateTime, Utc};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Clock trait for time abstraction
pub trait Clock: Send + Sync {
    /// Current time as milliseconds since epoch
    fn now_millis(&self) -> u64;

    /// Sleep for a duration
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;

    /// Current time as a UTC timestamp
    fn now_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_millis() as i64).unwrap_or_default()
    }
}

/// Real clock using system time
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Fake clock for testing with controllable time. Sleeping advances the
/// clock and returns immediately, so a delay-replaying test records the
/// passage of time without waiting for it.
#[derive(Clone, Debug)]
pub struct FakeClock {
    current_millis: Arc<AtomicU64>,
}

impl FakeClock {
    /// Fake clock starting at a given time
    pub fn new(start_millis: u64) -> Self {
        Self {
            current_millis: Arc::new(AtomicU64::new(start_millis)),
        }
    }

    /// Fake clock starting at Unix epoch
    pub fn at_epoch() -> Self {
        Self::new(0)
    }

    /// Advance time by a duration
    pub fn advance(&self, duration: Duration) {
        self.advance_ms(duration.as_millis() as u64);
    }

    /// Advance time by milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.current_millis.fetch_add(ms, Ordering::SeqCst);
    }

    /// Set absolute time
    pub fn set(&self, millis: u64) {
        self.current_millis.store(millis, Ordering::SeqCst);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::at_epoch()
    }
}

impl Clock for FakeClock {
    fn now_millis(&self) -> u64 {
        self.current_millis.load(Ordering::SeqCst)
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.advance(duration);
        Box::pin(async {})
    }
}

/// Clock handle that can be either real or fake
#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    /// System clock handle
    pub fn system() -> Self {
        Self::System(SystemClock)
    }

    /// Fake clock handle at a specific time
    pub fn fake_at(millis: u64) -> Self {
        Self::Fake(FakeClock::new(millis))
    }

    /// Fake clock handle at epoch
    pub fn fake_at_epoch() -> Self {
        Self::Fake(FakeClock::at_epoch())
    }

    /// As fake clock for manipulation (None for a system clock)
    pub fn as_fake(&self) -> Option<&FakeClock> {
        match self {
            Self::Fake(f) => Some(f),
            Self::System(_) => None,
        }
    }

    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake(_))
    }
}

impl Clock for ClockHandle {
    fn now_millis(&self) -> u64 {
        match self {
            Self::System(c) => c.now_millis(),
            Self::Fake(c) => c.now_millis(),
        }
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        match self {
            Self::System(c) => c.sleep(duration),
            Self::Fake(c) => c.sleep(duration),
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
