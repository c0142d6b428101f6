//! Settings loading.
//!
//! Settings come from a JSON file in the platform config directory
//! (or an explicit path), then environment overrides are applied.

mod env;
mod settings_repository;

pub use env::{ENV_INTERVAL_MS, ENV_UPDATER, ENV_ZONE, apply_env_overrides};
pub use settings_repository::{SettingsError, SettingsRepository};
