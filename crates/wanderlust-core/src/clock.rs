//! Wall-clock access for values derived at render time.

use chrono::{Datelike, Local};

/// Source of the current calendar year.
///
/// Implementations are queried on every render and must not cache.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// The current calendar year in local time.
    fn current_year(&self) -> i32;
}

/// Clock backed by the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Clock pinned to a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
