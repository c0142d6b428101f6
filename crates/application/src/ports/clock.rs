//! Time source port.

use chrono::{DateTime, NaiveDateTime, Utc};
use horologe_domain::ClockZone;

/// Source of the current instant.
///
/// The system adapter reads the OS clock; tests and simulated ticks plug in
/// a clock they move by hand.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The current wall-clock time in `zone`.
    fn wall_time(&self, zone: ClockZone) -> NaiveDateTime {
        zone.wall_time(self.now())
    }
}
