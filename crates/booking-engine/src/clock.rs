//! Injectable time source.
//!
//! The past/horizon checks read `now()` through this trait so tests can
//! pin the clock instead of racing the wall.

use chrono::{DateTime, Utc};

/// Source of the current UTC instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
