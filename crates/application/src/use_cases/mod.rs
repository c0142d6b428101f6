//! Use cases - Application business logic
//!
//! Each use case orchestrates domain logic and port interactions.

mod refresh_clock;

pub use refresh_clock::RefreshClock;
