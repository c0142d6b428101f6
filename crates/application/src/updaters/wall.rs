//! Wall-clock updater.

use chrono::NaiveDateTime;
use horologe_domain::ClockState;

use crate::ports::ClockUpdater;

/// Shows the hour, minute and second of the instant it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClockUpdater;

impl WallClockUpdater {
    /// Creates a new wall-clock updater.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ClockUpdater for WallClockUpdater {
    fn update(&self, _current: &ClockState, now: NaiveDateTime) -> ClockState {
        ClockState::from_time(&now)
    }

    fn name(&self) -> &'static str {
        "wall"
    }
}
