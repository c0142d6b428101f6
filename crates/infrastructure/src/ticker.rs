//! Repeating tick source.
//!
//! A [`Ticker`] runs a callback on a tokio task once per period. The returned
//! [`TickerHandle`] owns the task: stopping or dropping the handle cancels it,
//! so a ticker never outlives the view that started it.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Fires a callback once per period.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    period: Duration,
}

impl Ticker {
    /// Creates a ticker with the given period.
    ///
    /// A zero period is clamped to one millisecond.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
        }
    }

    /// Ticker firing once per second.
    #[must_use]
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// The tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Starts ticking on the current tokio runtime.
    ///
    /// The first tick fires one period after the call. `on_tick` receives the
    /// 1-based tick count; returning [`ControlFlow::Break`] ends the ticker.
    /// Ticks missed while the runtime was busy are skipped, not replayed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&self, mut on_tick: F) -> TickerHandle
    where
        F: FnMut(u64) -> ControlFlow<()> + Send + 'static,
    {
        let period = self.period;
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            let mut count = 0_u64;
            loop {
                interval.tick().await;
                count += 1;
                if on_tick(count).is_break() {
                    tracing::debug!(ticks = count, "ticker finished");
                    break;
                }
            }
        });

        tracing::debug!(?period, "ticker started");
        TickerHandle { task }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::every_second()
    }
}

/// Owns a running ticker; dropping it stops the ticks.
#[derive(Debug)]
pub struct TickerHandle {
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Stops the ticker. No callback runs after the task observes the abort.
    pub fn stop(&self) {
        if !self.task.is_finished() {
            tracing::debug!("ticker stopped");
        }
        self.task.abort();
    }

    /// Whether the ticker task is still alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
