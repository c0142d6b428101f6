//! Refresh clock use case.

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use horologe_domain::{ClockState, ClockZone};

use crate::observable::ObservableClock;
use crate::ports::{Clock, ClockUpdater};

/// Use case run on every tick: reads the time and computes the next state.
#[derive(Clone)]
pub struct RefreshClock {
    clock: Arc<dyn Clock>,
    updater: Arc<dyn ClockUpdater>,
    zone: ClockZone,
}

impl RefreshClock {
    /// Creates a new `RefreshClock` use case.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, updater: Arc<dyn ClockUpdater>, zone: ClockZone) -> Self {
        Self {
            clock,
            updater,
            zone,
        }
    }

    /// Wall-clock time for `at`, or for the clock port's now when `at` is `None`.
    #[must_use]
    pub fn wall_time(&self, at: Option<DateTime<Utc>>) -> NaiveDateTime {
        at.map_or_else(
            || self.clock.wall_time(self.zone),
            |instant| self.zone.wall_time(instant),
        )
    }

    /// Computes the state that replaces `current` (owned model).
    #[must_use]
    pub fn apply(&self, current: &ClockState, at: Option<DateTime<Utc>>) -> ClockState {
        let next = self.updater.update(current, self.wall_time(at));
        tracing::trace!(updater = self.updater.name(), state = %next, "clock refreshed");
        next
    }

    /// Updates a shared clock in place (observable model).
    ///
    /// Returns `true` when its subscribers were notified.
    pub fn apply_shared(&self, target: &ObservableClock, at: Option<DateTime<Utc>>) -> bool {
        let changed = target.update_with(self.updater.as_ref(), self.wall_time(at));
        tracing::trace!(updater = self.updater.name(), changed, "shared clock refreshed");
        changed
    }

    /// The active zone.
    #[must_use]
    pub const fn zone(&self) -> ClockZone {
        self.zone
    }

    /// The active updater's name.
    #[must_use]
    pub fn updater_name(&self) -> &'static str {
        self.updater.name()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::updaters::{FixedUpdater, WallClockUpdater};

    struct StoppedClock(DateTime<Utc>);

    impl Clock for StoppedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 7, 7, h, m, s).unwrap()
    }

    fn refresh(updater: Arc<dyn ClockUpdater>, zone: ClockZone) -> RefreshClock {
        RefreshClock::new(Arc::new(StoppedClock(utc(14, 3, 7))), updater, zone)
    }

    #[test]
    fn one_tick_moves_placeholder_to_now() {
        let use_case = refresh(Arc::new(WallClockUpdater::new()), ClockZone::Utc);
        let start = ClockState::new("00", "11", "30").unwrap();

        let next = use_case.apply(&start, None);

        assert_eq!(next, ClockState::new("14", "03", "07").unwrap());
    }

    #[test]
    fn explicit_instant_overrides_clock() {
        let use_case = refresh(Arc::new(WallClockUpdater::new()), ClockZone::Utc);
        let next = use_case.apply(&ClockState::placeholder(), Some(utc(23, 59, 59)));
        assert_eq!(next.to_string(), "23:59:59");
    }

    #[test]
    fn zone_offset_applies() {
        let zone: ClockZone = "+09:00".parse().unwrap();
        let use_case = refresh(Arc::new(WallClockUpdater::new()), zone);
        assert_eq!(use_case.apply(&ClockState::placeholder(), None).to_string(), "23:03:07");
        assert_eq!(use_case.zone(), zone);
    }

    #[test]
    fn fixed_updater_ignores_time() {
        let fixed = ClockState::new("12", "22", "00").unwrap();
        let use_case = refresh(Arc::new(FixedUpdater::new(fixed.clone())), ClockZone::Utc);
        assert_eq!(use_case.apply(&ClockState::placeholder(), None), fixed);
        assert_eq!(use_case.apply(&fixed, Some(utc(0, 0, 0))), fixed);
        assert_eq!(use_case.updater_name(), "fixed");
    }

    #[test]
    fn shared_refresh_notifies_once() {
        let use_case = refresh(Arc::new(WallClockUpdater::new()), ClockZone::Utc);
        let shared = ObservableClock::default();
        let rx = shared.subscribe();

        assert!(use_case.apply_shared(&shared, None));
        assert!(!use_case.apply_shared(&shared, None));
        assert!(rx.has_changed().unwrap());
        assert_eq!(shared.snapshot().to_string(), "14:03:07");
    }
}
