//! Time source adapters.

mod clocks;

pub use clocks::{ManualClock, SystemClock};
