//! Command line interface.

use std::path::PathBuf;

use clap::Parser;
use horologe_domain::{ClockMode, ClockSettings, ClockZone, DisplayStyle, UpdaterKind};
use horologe_infrastructure::{SettingsError, SettingsRepository, apply_env_overrides};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "horologe", version, about = "Live digital clock for the terminal", long_about = None)]
pub struct Cli {
    /// Path to a JSON settings file. When omitted, the default config file is used if present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Clock updater: wall, fixed or hours-only.
    #[arg(long, value_name = "KIND")]
    pub updater: Option<UpdaterKind>,

    /// State ownership: owned or observable.
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ClockMode>,

    /// Timezone: local, utc, or an offset such as +05:30.
    #[arg(long, value_name = "ZONE", allow_hyphen_values = true)]
    pub zone: Option<ClockZone>,

    /// Display style: plain or large.
    #[arg(long, value_name = "STYLE")]
    pub display: Option<DisplayStyle>,

    /// Milliseconds between ticks.
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Exit after this many ticks.
    #[arg(long, value_name = "N")]
    pub ticks: Option<u64>,

    /// Print the effective settings as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Loads settings from file, applies environment overrides read through
    /// `env`, then flags on top. The result is validated once, after every
    /// layer is in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded, an override cannot be
    /// parsed, or the final settings are invalid.
    pub async fn resolve_settings<F>(&self, env: F) -> Result<ClockSettings, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let repo = self
            .config
            .as_ref()
            .map_or_else(SettingsRepository::new, |path| {
                SettingsRepository::with_path(path.clone())
            });

        let mut settings = repo.load().await?;
        apply_env_overrides(&mut settings, env)?;
        self.apply(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    /// Overwrites settings with every flag that was given.
    pub fn apply(&self, settings: &mut ClockSettings) {
        if let Some(updater) = self.updater {
            settings.updater = updater;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(zone) = self.zone {
            settings.zone = zone;
        }
        if let Some(display) = self.display {
            settings.display = display;
        }
        if let Some(interval_ms) = self.interval_ms {
            settings.tick_interval_ms = interval_ms;
        }
        if let Some(ticks) = self.ticks {
            settings.max_ticks = Some(ticks);
        }
    }
}
