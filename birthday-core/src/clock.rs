//! Source of the current time.

use chrono::{Local, NaiveDateTime};

/// Wall clock seen by the countdown.
pub trait Clock: Send {
    /// Current local time, without a zone.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
