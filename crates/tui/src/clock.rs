//! Time sources for rendering.
//!
//! The card shows values relative to "now" (days remaining, generation
//! date). The host samples a [`Clock`] once per frame and passes the instant
//! into rendering, which keeps widgets deterministic under test.

use chrono::{DateTime, Utc};

/// A source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use wcard_tui::clock::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
/// let clock = FixedClock(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
