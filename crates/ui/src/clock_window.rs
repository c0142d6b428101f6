//! Clock window management
//!
//! Wires the ticker, the clock model and a view together and runs the UI
//! loop until shutdown or the configured tick limit.

use std::future::Future;
use std::ops::ControlFlow;
use std::sync::Arc;

use horologe_application::{Clock, ObservableClock, RefreshClock, build_updater};
use horologe_domain::{ClockMode, ClockSettings, ClockState};
use horologe_infrastructure::{Ticker, TickerHandle};
use tokio::sync::mpsc;

use crate::bridge::UiUpdate;
use crate::display::ClockDisplay;
use crate::error::UiError;
use crate::surface::Surface;
use crate::view::{ClockView, SharedClockView};

/// What happened during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks handled.
    pub ticks: u64,
    /// Frames drawn, including the initial one.
    pub renders: u64,
    /// State on screen when the loop ended.
    pub last_state: ClockState,
}

/// The clock application window.
pub struct ClockWindow<S: Surface> {
    settings: ClockSettings,
    refresh: RefreshClock,
    surface: S,
}

impl<S: Surface> ClockWindow<S> {
    /// Creates a window from settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured updater cannot be built.
    pub fn new(settings: ClockSettings, clock: Arc<dyn Clock>, surface: S) -> Result<Self, UiError> {
        let updater = build_updater(&settings)?;
        let refresh = RefreshClock::new(clock, updater, settings.zone);
        Ok(Self {
            settings,
            refresh,
            surface,
        })
    }

    /// Runs the UI loop until `shutdown` resolves or the tick limit is hit.
    ///
    /// Must be called from within a tokio runtime; the ticker runs on its
    /// own task and only posts [`UiUpdate`]s to this loop.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub async fn run<F>(self, shutdown: F) -> Result<(RunSummary, S), UiError>
    where
        F: Future<Output = ()>,
    {
        let (tick_tx, update_rx) = mpsc::unbounded_channel::<UiUpdate>();

        let ticker = Ticker::new(self.settings.tick_interval());
        let handle = ticker.start(move |count| {
            if tick_tx.send(UiUpdate::Tick { count }).is_ok() {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        });

        tracing::info!(
            updater = self.refresh.updater_name(),
            mode = %self.settings.mode,
            zone = %self.refresh.zone(),
            display = %self.settings.display,
            interval_ms = self.settings.tick_interval_ms,
            "clock started"
        );

        let display = ClockDisplay::new(self.settings.display);
        let max_ticks = self.settings.max_ticks;

        let result = match self.settings.mode {
            ClockMode::Owned => {
                let view = ClockView::new(self.refresh, display, self.surface);
                run_owned(view, update_rx, shutdown, max_ticks, &handle).await
            }
            ClockMode::Observable => {
                let shared = ObservableClock::new(ClockState::placeholder());
                let view = SharedClockView::new(&shared, display, self.surface);
                run_shared(&shared, &self.refresh, view, update_rx, shutdown, max_ticks, &handle)
                    .await
            }
        };

        handle.stop();
        if let Ok((summary, _)) = &result {
            tracing::info!(
                ticks = summary.ticks,
                renders = summary.renders,
                state = %summary.last_state,
                "clock stopped"
            );
        }
        result
    }
}

async fn run_owned<S, F>(
    mut view: ClockView<S>,
    mut updates: mpsc::UnboundedReceiver<UiUpdate>,
    shutdown: F,
    max_ticks: Option<u64>,
    ticker: &TickerHandle,
) -> Result<(RunSummary, S), UiError>
where
    S: Surface,
    F: Future<Output = ()>,
{
    view.mount()?;
    let ticks = event_loop(&mut updates, shutdown, max_ticks, ticker, |_| {
        view.on_tick(None).map(|_| ())
    })
    .await?;

    let summary = RunSummary {
        ticks,
        renders: view.renders(),
        last_state: view.state().clone(),
    };
    Ok((summary, view.unmount()?))
}

async fn run_shared<S, F>(
    shared: &ObservableClock,
    refresh: &RefreshClock,
    mut view: SharedClockView<S>,
    mut updates: mpsc::UnboundedReceiver<UiUpdate>,
    shutdown: F,
    max_ticks: Option<u64>,
    ticker: &TickerHandle,
) -> Result<(RunSummary, S), UiError>
where
    S: Surface,
    F: Future<Output = ()>,
{
    view.mount()?;
    let ticks = event_loop(&mut updates, shutdown, max_ticks, ticker, |_| {
        refresh.apply_shared(shared, None);
        view.render_if_changed().map(|_| ())
    })
    .await?;

    let summary = RunSummary {
        ticks,
        renders: view.renders(),
        last_state: shared.snapshot(),
    };
    Ok((summary, view.unmount()?))
}

/// Dispatches ticks to `on_tick` until shutdown, the tick limit, or the
/// ticker going away. Returns the number of ticks handled.
async fn event_loop<F, T>(
    updates: &mut mpsc::UnboundedReceiver<UiUpdate>,
    shutdown: F,
    max_ticks: Option<u64>,
    ticker: &TickerHandle,
    mut on_tick: T,
) -> Result<u64, UiError>
where
    F: Future<Output = ()>,
    T: FnMut(u64) -> Result<(), UiError>,
{
    tokio::pin!(shutdown);
    let mut handled = 0_u64;

    loop {
        let update = tokio::select! {
            update = updates.recv() => update,
            () = &mut shutdown => Some(UiUpdate::Shutdown),
        };

        match update {
            Some(UiUpdate::Tick { count }) => {
                on_tick(count)?;
                handled += 1;
                if max_ticks.is_some_and(|max| handled >= max) {
                    tracing::debug!(ticks = handled, "tick limit reached");
                    ticker.stop();
                    break;
                }
            }
            Some(UiUpdate::Shutdown) => {
                tracing::debug!("shutdown requested");
                break;
            }
            None => break,
        }
    }

    Ok(handled)
}
