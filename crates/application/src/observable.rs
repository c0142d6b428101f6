//! Shared clock state with change notification.
//!
//! The app root and every view hold an [`ObservableClock`] handle. Views call
//! [`ObservableClock::subscribe`] and re-render when the receiver reports a
//! change; publishing an identical value does not wake them.

use std::sync::Arc;

use chrono::NaiveDateTime;
use horologe_domain::ClockState;
use tokio::sync::watch;

use crate::ports::ClockUpdater;

/// Cloneable handle to a shared, observable [`ClockState`].
#[derive(Debug, Clone)]
pub struct ObservableClock {
    sender: Arc<watch::Sender<ClockState>>,
}

impl ObservableClock {
    /// Creates a shared clock holding `initial`.
    #[must_use]
    pub fn new(initial: ClockState) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Registers a new subscriber.
    ///
    /// The receiver sees the current value as already seen; `changed()`
    /// resolves on the next publish that alters a field.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ClockState> {
        self.sender.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ClockState {
        self.sender.borrow().clone()
    }

    /// Replaces the state, notifying subscribers if it changed.
    ///
    /// Returns `true` when subscribers were notified.
    pub fn publish(&self, next: ClockState) -> bool {
        self.sender.send_if_modified(|state| replace_if_changed(state, next))
    }

    /// Runs `updater` against the shared state in place.
    ///
    /// Returns `true` when subscribers were notified.
    pub fn update_with(&self, updater: &dyn ClockUpdater, now: NaiveDateTime) -> bool {
        self.sender.send_if_modified(|state| {
            let next = updater.update(state, now);
            replace_if_changed(state, next)
        })
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ObservableClock {
    fn default() -> Self {
        Self::new(ClockState::placeholder())
    }
}

fn replace_if_changed(state: &mut ClockState, next: ClockState) -> bool {
    if *state == next {
        false
    } else {
        *state = next;
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::updaters::{FixedUpdater, HoursOnlyUpdater, WallClockUpdater};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 7, 7)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[tokio::test]
    async fn subscribers_see_updates() {
        let clock = ObservableClock::default();
        let mut rx = clock.subscribe();

        assert!(clock.update_with(&WallClockUpdater::new(), at(14, 3, 7)));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().to_string(), "14:03:07");
    }

    #[tokio::test]
    async fn identical_value_does_not_notify() {
        let clock = ObservableClock::new(ClockState::new("12", "22", "00").unwrap());
        let rx = clock.subscribe();
        let fixed = FixedUpdater::new(ClockState::new("12", "22", "00").unwrap());

        assert!(!clock.update_with(&fixed, at(1, 2, 3)));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn clones_share_state() {
        let root = ObservableClock::default();
        let view = root.clone();
        let _rx = view.subscribe();

        root.update_with(&HoursOnlyUpdater::new("09").unwrap(), at(1, 2, 3));

        assert_eq!(view.snapshot().to_string(), "09:11:30");
        assert_eq!(root.subscriber_count(), 1);
    }

    #[test]
    fn publish_without_subscribers_still_stores() {
        let clock = ObservableClock::default();
        assert!(clock.publish(ClockState::from_components(1, 2, 3).unwrap()));
        assert_eq!(clock.snapshot().to_string(), "01:02:03");
        assert_eq!(clock.subscriber_count(), 0);
    }
}
