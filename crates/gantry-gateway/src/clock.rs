//! Time source for condition timestamps

use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

/// Supplies the current time for `lastTransitionTime`
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
