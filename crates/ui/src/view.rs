//! Clock views.
//!
//! [`ClockView`] owns its [`ClockState`] outright. [`SharedClockView`]
//! subscribes to an [`ObservableClock`] owned jointly with the app root. Both
//! only know the updater through [`RefreshClock`] or the shared clock, so
//! swapping strategies never touches these types.

use chrono::{DateTime, Utc};
use horologe_application::{ObservableClock, RefreshClock};
use horologe_domain::ClockState;
use tokio::sync::watch;

use crate::display::ClockDisplay;
use crate::error::UiError;
use crate::surface::Surface;

/// A view that exclusively owns its clock state.
pub struct ClockView<S: Surface> {
    state: ClockState,
    refresh: RefreshClock,
    display: ClockDisplay,
    surface: S,
    renders: u64,
}

impl<S: Surface> ClockView<S> {
    /// Creates a view showing the placeholder state.
    #[must_use]
    pub fn new(refresh: RefreshClock, display: ClockDisplay, surface: S) -> Self {
        Self {
            state: ClockState::placeholder(),
            refresh,
            display,
            surface,
            renders: 0,
        }
    }

    /// Draws the current state once.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn mount(&mut self) -> Result<(), UiError> {
        self.render()
    }

    /// Handles one tick: refreshes the state and redraws if it changed.
    ///
    /// `at` overrides the clock port for simulated ticks. Returns whether a
    /// redraw happened.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn on_tick(&mut self, at: Option<DateTime<Utc>>) -> Result<bool, UiError> {
        let next = self.refresh.apply(&self.state, at);
        if next == self.state {
            return Ok(false);
        }
        self.state = next;
        self.render()?;
        Ok(true)
    }

    /// The state on screen.
    #[must_use]
    pub const fn state(&self) -> &ClockState {
        &self.state
    }

    /// Frames drawn so far.
    #[must_use]
    pub const fn renders(&self) -> u64 {
        self.renders
    }

    /// Finishes the surface and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be finished.
    pub fn unmount(mut self) -> Result<S, UiError> {
        self.surface.finish()?;
        Ok(self.surface)
    }

    fn render(&mut self) -> Result<(), UiError> {
        self.surface.draw(&self.display.render(&self.state))?;
        self.renders += 1;
        Ok(())
    }
}

/// A view that renders a shared [`ObservableClock`].
pub struct SharedClockView<S: Surface> {
    updates: watch::Receiver<ClockState>,
    display: ClockDisplay,
    surface: S,
    renders: u64,
}

impl<S: Surface> SharedClockView<S> {
    /// Subscribes a new view to `clock`.
    #[must_use]
    pub fn new(clock: &ObservableClock, display: ClockDisplay, surface: S) -> Self {
        Self {
            updates: clock.subscribe(),
            display,
            surface,
            renders: 0,
        }
    }

    /// Draws the current shared state once.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn mount(&mut self) -> Result<(), UiError> {
        let frame = self.display.render(&self.updates.borrow_and_update());
        self.draw(&frame)
    }

    /// Redraws if the shared state changed since the last draw.
    ///
    /// Returns whether a redraw happened.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Detached`] if the shared clock was dropped, or an
    /// error if drawing fails.
    pub fn render_if_changed(&mut self) -> Result<bool, UiError> {
        if !self.updates.has_changed().map_err(|_| UiError::Detached)? {
            return Ok(false);
        }
        let frame = self.display.render(&self.updates.borrow_and_update());
        self.draw(&frame)?;
        Ok(true)
    }

    /// Waits for the shared state to change, then redraws.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Detached`] if the shared clock was dropped, or an
    /// error if drawing fails.
    pub async fn next_frame(&mut self) -> Result<(), UiError> {
        self.updates.changed().await.map_err(|_| UiError::Detached)?;
        let frame = self.display.render(&self.updates.borrow_and_update());
        self.draw(&frame)
    }

    /// The state last seen by this view.
    #[must_use]
    pub fn state(&self) -> ClockState {
        self.updates.borrow().clone()
    }

    /// Frames drawn so far.
    #[must_use]
    pub const fn renders(&self) -> u64 {
        self.renders
    }

    /// Finishes the surface and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be finished.
    pub fn unmount(mut self) -> Result<S, UiError> {
        self.surface.finish()?;
        Ok(self.surface)
    }

    fn draw(&mut self, frame: &str) -> Result<(), UiError> {
        self.surface.draw(frame)?;
        self.renders += 1;
        Ok(())
    }
}
