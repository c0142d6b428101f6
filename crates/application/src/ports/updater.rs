//! Clock updater port

use chrono::NaiveDateTime;
use horologe_domain::ClockState;

/// Capability that produces the next clock value.
///
/// Views are written against this trait only, so a new way of producing
/// the displayed value is added by implementing it, never by changing a view.
pub trait ClockUpdater: Send + Sync {
    /// Computes the state to show at wall-clock time `now`.
    ///
    /// `current` is the state on screen; strategies that only touch some
    /// fields copy the rest from it.
    fn update(&self, current: &ClockState, now: NaiveDateTime) -> ClockState;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
