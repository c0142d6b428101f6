//! Clock settings file.
//!
//! Settings are read from the platform-specific config directory:
//! - Linux: ~/.config/horologe/settings.json
//! - macOS: ~/Library/Application Support/horologe/settings.json
//! - Windows: %APPDATA%/horologe/settings.json
//!
//! The file is only ever read; the clock keeps no state on disk.

use std::path::{Path, PathBuf};

use horologe_domain::{ClockSettings, DomainError};
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// The settings parsed but hold an unusable value.
    #[error("Invalid settings: {0}")]
    Domain(#[from] DomainError),

    /// An explicitly requested settings file does not exist.
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An environment override could not be parsed.
    #[error("Invalid value for {key}: {reason}")]
    InvalidEnv {
        /// Variable name.
        key: &'static str,
        /// Parse failure.
        reason: String,
    },
}

/// Repository for clock settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
    explicit: bool,
}

impl SettingsRepository {
    /// Creates a repository reading the default settings file.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
            explicit: false,
        }
    }

    /// Creates a repository reading `path`, which must exist.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            explicit: true,
        }
    }

    /// Returns the path to the Horologe config directory.
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("horologe"))
    }

    /// Returns the default settings file location, if one can be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.json"))
    }

    /// The file this repository reads.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings as written in the file.
    ///
    /// Returns default settings if the default file doesn't exist. Values are
    /// not validated here: environment and CLI overrides may still replace
    /// them, so callers run [`ClockSettings::validate`] once every layer is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or was given
    /// explicitly and is missing.
    pub async fn load(&self) -> Result<ClockSettings, SettingsError> {
        let Some(path) = &self.path else {
            tracing::debug!("no config directory, using default settings");
            return Ok(ClockSettings::default());
        };

        if !fs::try_exists(path).await? {
            if self.explicit {
                return Err(SettingsError::NotFound(path.clone()));
            }
            tracing::debug!(path = %path.display(), "settings file absent, using defaults");
            return Ok(ClockSettings::default());
        }

        let content = fs::read(path).await?;
        let settings: ClockSettings = from_json_bytes(&content)?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}
