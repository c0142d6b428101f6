//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer
//! or by strategies in this crate.

mod clock;
mod updater;

pub use clock::Clock;
pub use updater::ClockUpdater;
