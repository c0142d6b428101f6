//! Clock Settings Domain Model
//!
//! Defines user preferences for the Horologe clock.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::{ClockState, ClockZone};
use crate::error::{DomainError, DomainResult};

/// Strategy that produces the clock value on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UpdaterKind {
    /// Reads the wall clock (default).
    #[default]
    Wall,
    /// Always shows the configured fixed value.
    Fixed,
    /// Only sets the hours, leaving minutes and seconds untouched.
    HoursOnly,
}

/// How the clock state is owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// The view owns its state exclusively (default).
    #[default]
    Owned,
    /// The state is shared and views subscribe to changes.
    Observable,
}

/// How the clock is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// A single `HH:MM:SS` line (default).
    #[default]
    Plain,
    /// Five-row block digits.
    Large,
}

macro_rules! keyword_enum {
    ($ty:ty, $what:literal, { $($text:literal => $variant:path),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $($variant => $text,)+
                })
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($variant),)+
                    other => Err(DomainError::InvalidSetting {
                        name: $what,
                        reason: format!("unknown value {other:?}"),
                    }),
                }
            }
        }
    };
}

keyword_enum!(UpdaterKind, "updater", {
    "wall" => UpdaterKind::Wall,
    "fixed" => UpdaterKind::Fixed,
    "hours-only" => UpdaterKind::HoursOnly,
});

keyword_enum!(ClockMode, "mode", {
    "owned" => ClockMode::Owned,
    "observable" => ClockMode::Observable,
});

keyword_enum!(DisplayStyle, "display", {
    "plain" => DisplayStyle::Plain,
    "large" => DisplayStyle::Large,
});

/// Settings for a clock session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSettings {
    /// Which updater drives the clock.
    #[serde(default)]
    pub updater: UpdaterKind,

    /// Owned or observable state.
    #[serde(default)]
    pub mode: ClockMode,

    /// Timezone used by the wall-clock updater.
    #[serde(default)]
    pub zone: ClockZone,

    /// Rendering style.
    #[serde(default)]
    pub display: DisplayStyle,

    /// Milliseconds between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Value shown by the fixed updater.
    #[serde(default = "default_fixed_value")]
    pub fixed_value: ClockState,

    /// Hours shown by the hours-only updater.
    #[serde(default = "default_fixed_hours")]
    pub fixed_hours: String,

    /// Stop after this many ticks; run forever when absent.
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_fixed_value() -> ClockState {
    ClockState::new("12", "22", "00").unwrap_or_default()
}

fn default_fixed_hours() -> String {
    "12".to_string()
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            updater: UpdaterKind::default(),
            mode: ClockMode::default(),
            zone: ClockZone::default(),
            display: DisplayStyle::default(),
            tick_interval_ms: default_tick_interval_ms(),
            fixed_value: default_fixed_value(),
            fixed_hours: default_fixed_hours(),
            max_ticks: None,
        }
    }
}

impl ClockSettings {
    /// Checks values serde cannot reject on its own.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSetting`] for a zero interval or tick
    /// limit, and [`DomainError::InvalidField`] for bad fixed hours.
    pub fn validate(&self) -> DomainResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(DomainError::InvalidSetting {
                name: "tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_ticks == Some(0) {
            return Err(DomainError::InvalidSetting {
                name: "max_ticks",
                reason: "must be greater than zero".to_string(),
            });
        }
        ClockState::placeholder().with_hours(self.fixed_hours.clone())?;
        Ok(())
    }

    /// Tick period as a [`Duration`].
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_settings() {
        let settings = ClockSettings::default();
        assert_eq!(settings.updater, UpdaterKind::Wall);
        assert_eq!(settings.mode, ClockMode::Owned);
        assert_eq!(settings.zone, ClockZone::Local);
        assert_eq!(settings.display, DisplayStyle::Plain);
        assert_eq!(settings.tick_interval(), Duration::from_secs(1));
        assert_eq!(settings.fixed_value.to_string(), "12:22:00");
        assert_eq!(settings.fixed_hours, "12");
        assert_eq!(settings.max_ticks, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let settings: ClockSettings =
            serde_json::from_str(r#"{ "updater": "hours-only", "zone": "+02:00" }"#).unwrap();
        assert_eq!(settings.updater, UpdaterKind::HoursOnly);
        assert_eq!(settings.zone.to_string(), "+02:00");
        assert_eq!(settings.tick_interval_ms, 1000);
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let settings = ClockSettings {
            tick_interval_ms: 0,
            ..ClockSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(DomainError::InvalidSetting {
                name: "tick_interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_bad_fixed_hours() {
        let settings = ClockSettings {
            fixed_hours: "24".to_string(),
            ..ClockSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(DomainError::InvalidField { .. })
        ));
    }

    #[test]
    fn keywords_parse_and_display() {
        assert_eq!("hours-only".parse::<UpdaterKind>().unwrap(), UpdaterKind::HoursOnly);
        assert_eq!(UpdaterKind::HoursOnly.to_string(), "hours-only");
        assert_eq!("Observable".parse::<ClockMode>().unwrap(), ClockMode::Observable);
        assert_eq!(DisplayStyle::Large.to_string(), "large");
        assert!("sundial".parse::<UpdaterKind>().is_err());
    }
}
