//! Horologe UI - Terminal presentation layer
//!
//! This crate renders the clock to a terminal and drives it from ticker
//! events. All state mutation and drawing happen on the task running
//! [`ClockWindow::run`].

mod clock_window;
pub mod bridge;
pub mod display;
pub mod error;
pub mod surface;
pub mod view;

pub use bridge::UiUpdate;
pub use clock_window::{ClockWindow, RunSummary};
pub use display::ClockDisplay;
pub use error::UiError;
pub use surface::{Surface, TerminalSurface};
pub use view::{ClockView, SharedClockView};
