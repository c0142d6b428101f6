//! UI Bridge Module
//!
//! Messages sent from background tasks to the UI loop. The UI loop is the
//! only place clock state is read or written.

/// Updates delivered to the UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiUpdate {
    /// The ticker fired; `count` is the 1-based tick number.
    Tick {
        /// Ticks delivered so far.
        count: u64,
    },

    /// Leave the UI loop.
    Shutdown,
}
