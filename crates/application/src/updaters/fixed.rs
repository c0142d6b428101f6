//! Fixed-value updater.

use chrono::NaiveDateTime;
use horologe_domain::ClockState;

use crate::ports::ClockUpdater;

/// Ignores the instant and always yields the same value.
#[derive(Debug, Clone)]
pub struct FixedUpdater {
    value: ClockState,
}

impl FixedUpdater {
    /// Creates an updater that always shows `value`.
    #[must_use]
    pub const fn new(value: ClockState) -> Self {
        Self { value }
    }
}

impl ClockUpdater for FixedUpdater {
    fn update(&self, _current: &ClockState, _now: NaiveDateTime) -> ClockState {
        self.value.clone()
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn always_yields_the_same_value() {
        let expected = ClockState::new("12", "22", "00").unwrap();
        let updater = FixedUpdater::new(expected.clone());
        let mut state = ClockState::placeholder();

        for hour in [0, 7, 13, 23] {
            let now = NaiveDate::from_ymd_opt(2023, 7, 7)
                .unwrap()
                .and_hms_opt(hour, 1, 2)
                .unwrap();
            state = updater.update(&state, now);
            assert_eq!(state, expected);
        }
    }
}
