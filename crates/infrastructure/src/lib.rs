//! Horologe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, the tokio-backed ticker and
//! settings loading.

pub mod adapters;
pub mod config;
pub mod serialization;
pub mod ticker;

pub use adapters::{ManualClock, SystemClock};
pub use config::{SettingsError, SettingsRepository, apply_env_overrides};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable};
pub use ticker::{Ticker, TickerHandle};
