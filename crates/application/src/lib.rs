//! Horologe Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - Clock updater strategies
//! - The observable clock state holder
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod observable;
pub mod ports;
pub mod updaters;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use observable::ObservableClock;
pub use ports::{Clock, ClockUpdater};
pub use updaters::{FixedUpdater, HoursOnlyUpdater, WallClockUpdater, build_updater};
pub use use_cases::RefreshClock;
