//! Clock state and wall-time conversion.

mod state;
mod zone;

pub use state::{ClockField, ClockState};
pub use zone::ClockZone;
