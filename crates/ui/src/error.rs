//! UI error types

use horologe_application::ApplicationError;
use thiserror::Error;

/// Errors raised while drawing or wiring the clock.
#[derive(Debug, Error)]
pub enum UiError {
    /// Writing to the terminal failed.
    #[error("terminal write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The clock could not be assembled from settings.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Every handle to the shared clock was dropped.
    #[error("shared clock is gone")]
    Detached,
}
