//! Clock updater strategies.
//!
//! Each strategy implements [`ClockUpdater`]; [`build_updater`] picks one
//! from settings so the choice is made once, at construction time.

mod fixed;
mod hours_only;
mod wall;

use std::sync::Arc;

use horologe_domain::{ClockSettings, UpdaterKind};

pub use fixed::FixedUpdater;
pub use hours_only::HoursOnlyUpdater;
pub use wall::WallClockUpdater;

use crate::ApplicationResult;
use crate::ports::ClockUpdater;

/// Builds the updater selected by `settings`.
///
/// # Errors
///
/// Returns an error if the configured fixed hours are not a valid hour.
pub fn build_updater(settings: &ClockSettings) -> ApplicationResult<Arc<dyn ClockUpdater>> {
    let updater: Arc<dyn ClockUpdater> = match settings.updater {
        UpdaterKind::Wall => Arc::new(WallClockUpdater::new()),
        UpdaterKind::Fixed => Arc::new(FixedUpdater::new(settings.fixed_value.clone())),
        UpdaterKind::HoursOnly => Arc::new(HoursOnlyUpdater::new(settings.fixed_hours.clone())?),
    };
    tracing::debug!(updater = updater.name(), "clock updater selected");
    Ok(updater)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use horologe_domain::ClockState;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builds_each_kind() {
        for (kind, name) in [
            (UpdaterKind::Wall, "wall"),
            (UpdaterKind::Fixed, "fixed"),
            (UpdaterKind::HoursOnly, "hours-only"),
        ] {
            let settings = ClockSettings {
                updater: kind,
                ..ClockSettings::default()
            };
            assert_eq!(build_updater(&settings).unwrap().name(), name);
        }
    }

    #[test]
    fn uses_configured_fixed_value() {
        let settings = ClockSettings {
            updater: UpdaterKind::Fixed,
            fixed_value: ClockState::new("08", "15", "42").unwrap(),
            ..ClockSettings::default()
        };
        let updater = build_updater(&settings).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();

        assert_eq!(
            updater.update(&ClockState::placeholder(), now).to_string(),
            "08:15:42"
        );
    }

    #[test]
    fn rejects_invalid_fixed_hours() {
        let settings = ClockSettings {
            updater: UpdaterKind::HoursOnly,
            fixed_hours: "99".to_string(),
            ..ClockSettings::default()
        };
        assert!(build_updater(&settings).is_err());
    }
}
