//! Domain error types

use thiserror::Error;

use crate::clock::ClockField;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A clock field is not two digits or is out of range.
    #[error("invalid {field} value: {value:?}")]
    InvalidField {
        /// The offending field.
        field: ClockField,
        /// The rejected value.
        value: String,
    },

    /// A clock value could not be parsed as `HH:MM:SS`.
    #[error("invalid clock value: {0:?}")]
    InvalidClockValue(String),

    /// A timezone specification is not `local`, `utc` or `+HH:MM`.
    #[error("invalid zone: {0:?}")]
    InvalidZone(String),

    /// A setting has an unusable value.
    #[error("invalid setting {name}: {reason}")]
    InvalidSetting {
        /// Setting name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
