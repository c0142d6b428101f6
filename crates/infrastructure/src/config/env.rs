//! Environment variable overrides for clock settings.

use horologe_domain::ClockSettings;

use super::SettingsError;

/// Overrides the updater (`wall`, `fixed`, `hours-only`).
pub const ENV_UPDATER: &str = "HOROLOGE_UPDATER";
/// Overrides the zone (`local`, `utc`, `+HH:MM`).
pub const ENV_ZONE: &str = "HOROLOGE_ZONE";
/// Overrides the tick interval in milliseconds.
pub const ENV_INTERVAL_MS: &str = "HOROLOGE_INTERVAL_MS";

/// Applies overrides found through `lookup` onto `settings`.
///
/// `lookup` is usually `|key| std::env::var(key).ok()`. Blank values are
/// ignored.
///
/// # Errors
///
/// Returns [`SettingsError::InvalidEnv`] naming the variable whose value
/// cannot be parsed.
pub fn apply_env_overrides<F>(settings: &mut ClockSettings, lookup: F) -> Result<(), SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    if let Some(value) = get(ENV_UPDATER) {
        settings.updater = value.parse().map_err(|e| invalid(ENV_UPDATER, e))?;
    }
    if let Some(value) = get(ENV_ZONE) {
        settings.zone = value.parse().map_err(|e| invalid(ENV_ZONE, e))?;
    }
    if let Some(value) = get(ENV_INTERVAL_MS) {
        settings.tick_interval_ms = value.parse().map_err(|e| invalid(ENV_INTERVAL_MS, e))?;
    }
    Ok(())
}

fn invalid(key: &'static str, err: impl std::fmt::Display) -> SettingsError {
    SettingsError::InvalidEnv {
        key,
        reason: err.to_string(),
    }
}
