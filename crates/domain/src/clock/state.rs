//! The displayed clock value.

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// One of the three displayed clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockField {
    /// Hour of day, `00`-`23`.
    Hours,
    /// Minute of hour, `00`-`59`.
    Minutes,
    /// Second of minute, `00`-`59`.
    Seconds,
}

impl ClockField {
    /// Largest value the field may hold.
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Self::Hours => 23,
            Self::Minutes | Self::Seconds => 59,
        }
    }
}

impl fmt::Display for ClockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        })
    }
}

/// Three zero-padded two-digit strings shown by the clock.
///
/// Every constructor validates the fields, so a `ClockState` always holds
/// exactly two ASCII digits per field with hours in `00`-`23` and minutes and
/// seconds in `00`-`59`.
///
/// Serializes as a single `"HH:MM:SS"` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockState {
    hours: String,
    minutes: String,
    seconds: String,
}

impl ClockState {
    /// Creates a state from already formatted fields.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidField`] if any field is not two digits
    /// or is out of range.
    pub fn new(
        hours: impl Into<String>,
        minutes: impl Into<String>,
        seconds: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            hours: validate_field(ClockField::Hours, hours.into())?,
            minutes: validate_field(ClockField::Minutes, minutes.into())?,
            seconds: validate_field(ClockField::Seconds, seconds.into())?,
        })
    }

    /// Creates a state from numeric components, zero-padding each.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidField`] if a component is out of range.
    pub fn from_components(hours: u32, minutes: u32, seconds: u32) -> DomainResult<Self> {
        Ok(Self {
            hours: format_component(ClockField::Hours, hours)?,
            minutes: format_component(ClockField::Minutes, minutes)?,
            seconds: format_component(ClockField::Seconds, seconds)?,
        })
    }

    /// Formats the hour, minute and second of a wall-clock time.
    #[must_use]
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // Timelike keeps these in range; leap seconds live in the nanosecond part.
        Self {
            hours: format!("{:02}", time.hour()),
            minutes: format!("{:02}", time.minute()),
            seconds: format!("{:02}", time.second()),
        }
    }

    /// The value a clock shows before its first tick: `00:11:30`.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            hours: "00".to_string(),
            minutes: "11".to_string(),
            seconds: "30".to_string(),
        }
    }

    /// Returns a copy with only the hours replaced.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidField`] if `hours` is invalid.
    pub fn with_hours(&self, hours: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            hours: validate_field(ClockField::Hours, hours.into())?,
            minutes: self.minutes.clone(),
            seconds: self.seconds.clone(),
        })
    }

    /// Hours field.
    #[must_use]
    pub fn hours(&self) -> &str {
        &self.hours
    }

    /// Minutes field.
    #[must_use]
    pub fn minutes(&self) -> &str {
        &self.minutes
    }

    /// Seconds field.
    #[must_use]
    pub fn seconds(&self) -> &str {
        &self.seconds
    }

    /// Returns the field by kind.
    #[must_use]
    pub fn field(&self, field: ClockField) -> &str {
        match field {
            ClockField::Hours => &self.hours,
            ClockField::Minutes => &self.minutes,
            ClockField::Seconds => &self.seconds,
        }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for ClockState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), Some(sec), None) => Self::new(h, m, sec),
            _ => Err(DomainError::InvalidClockValue(s.to_string())),
        }
    }
}

impl TryFrom<String> for ClockState {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockState> for String {
    fn from(state: ClockState) -> Self {
        state.to_string()
    }
}

fn validate_field(field: ClockField, value: String) -> DomainResult<String> {
    let valid = value.len() == 2
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.parse::<u32>().is_ok_and(|n| n <= field.max());

    if valid {
        Ok(value)
    } else {
        Err(DomainError::InvalidField { field, value })
    }
}

fn format_component(field: ClockField, value: u32) -> DomainResult<String> {
    if value > field.max() {
        return Err(DomainError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(format!("{value:02}"))
}
