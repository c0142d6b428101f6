//! Horologe Domain - Core clock types
//!
//! This crate defines the domain model for the Horologe clock.
//! All types here are pure Rust with no I/O dependencies.

pub mod clock;
pub mod error;
pub mod settings;

pub use clock::{ClockField, ClockState, ClockZone};
pub use error::{DomainError, DomainResult};
pub use settings::{ClockMode, ClockSettings, DisplayStyle, UpdaterKind};
