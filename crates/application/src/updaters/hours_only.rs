//! Updater that only sets the hours.

use chrono::NaiveDateTime;
use horologe_domain::{ClockState, DomainResult};

use crate::ports::ClockUpdater;

/// Replaces the hours with a constant and keeps minutes and seconds.
#[derive(Debug, Clone)]
pub struct HoursOnlyUpdater {
    // Validated in `new`, so `with_hours` cannot fail later.
    hours: String,
}

impl HoursOnlyUpdater {
    /// Creates an updater that sets the hours to `hours`.
    ///
    /// # Errors
    ///
    /// Returns an error if `hours` is not a two-digit hour `00`-`23`.
    pub fn new(hours: impl Into<String>) -> DomainResult<Self> {
        let hours = hours.into();
        ClockState::placeholder().with_hours(hours.clone())?;
        Ok(Self { hours })
    }
}

impl ClockUpdater for HoursOnlyUpdater {
    fn update(&self, current: &ClockState, _now: NaiveDateTime) -> ClockState {
        current
            .with_hours(self.hours.clone())
            .unwrap_or_else(|_| current.clone())
    }

    fn name(&self) -> &'static str {
        "hours-only"
    }
}
