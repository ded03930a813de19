//! System clock adapter

use chrono::{DateTime, Utc};
use polls_application::Clock;

/// [`Clock`] backed by the operating system's wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
