//! Integration tests for the clock flow
//!
//! These tests drive the full stack: settings file, updater selection,
//! ticker, views and terminal output, with a manual clock standing in for
//! the system time.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use horologe_application::{ObservableClock, RefreshClock, WallClockUpdater, build_updater};
use horologe_domain::{ClockMode, ClockSettings, ClockState, ClockZone, UpdaterKind};
use horologe_infrastructure::{ManualClock, SettingsRepository};
use horologe_ui::{ClockDisplay, ClockView, ClockWindow, SharedClockView, TerminalSurface};

fn output(surface: TerminalSurface<Vec<u8>>) -> String {
    String::from_utf8(surface.into_inner()).expect("utf-8 output")
}

#[test]
fn simulated_tick_replaces_placeholder() {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2023, 7, 7, 14, 3, 7).unwrap(),
    ));
    let refresh = RefreshClock::new(clock, Arc::new(WallClockUpdater::new()), ClockZone::Utc);
    let mut view = ClockView::new(
        refresh,
        ClockDisplay::default(),
        TerminalSurface::new(Vec::new()),
    );

    view.mount().unwrap();
    assert_eq!(view.state(), &ClockState::new("00", "11", "30").unwrap());

    view.on_tick(None).unwrap();
    assert_eq!(view.state(), &ClockState::new("14", "03", "07").unwrap());

    assert_eq!(output(view.unmount().unwrap()), "00:11:30\r14:03:07\n");
}

#[test]
fn manual_clock_walks_across_midnight() {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2023, 7, 7, 23, 59, 58).unwrap(),
    ));
    let refresh = RefreshClock::new(
        clock.clone(),
        Arc::new(WallClockUpdater::new()),
        ClockZone::Utc,
    );
    let mut view = ClockView::new(
        refresh,
        ClockDisplay::default(),
        TerminalSurface::new(Vec::new()),
    );

    let mut seen = Vec::new();
    for _ in 0..3 {
        view.on_tick(None).unwrap();
        seen.push(view.state().to_string());
        clock.advance(TimeDelta::seconds(1));
    }

    assert_eq!(seen, vec!["23:59:58", "23:59:59", "00:00:00"]);
}

#[test]
fn app_root_and_views_share_observable_state() {
    let settings = ClockSettings {
        updater: UpdaterKind::Fixed,
        ..ClockSettings::default()
    };
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let refresh = RefreshClock::new(clock, build_updater(&settings).unwrap(), settings.zone);

    let root = ObservableClock::default();
    let mut left = SharedClockView::new(
        &root,
        ClockDisplay::default(),
        TerminalSurface::new(Vec::new()),
    );
    let mut right = SharedClockView::new(
        &root.clone(),
        ClockDisplay::default(),
        TerminalSurface::new(Vec::new()),
    );
    left.mount().unwrap();
    right.mount().unwrap();

    assert!(refresh.apply_shared(&root, None));
    assert!(left.render_if_changed().unwrap());
    assert!(right.render_if_changed().unwrap());

    // Fixed value again: nothing to redraw.
    assert!(!refresh.apply_shared(&root, None));
    assert!(!left.render_if_changed().unwrap());

    assert_eq!(output(left.unmount().unwrap()), "00:11:30\r12:22:00\n");
    assert_eq!(right.state().to_string(), "12:22:00");
}

#[tokio::test(start_paused = true)]
async fn window_runs_from_settings_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{
  "mode": "observable",
  "zone": "+02:00",
  "tick_interval_ms": 500,
  "max_ticks": 4
}
"#,
    )
    .unwrap();

    let settings = SettingsRepository::with_path(&path)
        .load()
        .await
        .expect("Failed to load settings");
    assert_eq!(settings.mode, ClockMode::Observable);

    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2023, 7, 7, 22, 30, 0).unwrap(),
    ));
    let window = ClockWindow::new(settings, clock, TerminalSurface::new(Vec::new())).unwrap();

    let started = tokio::time::Instant::now();
    let (summary, surface) = window.run(std::future::pending()).await.unwrap();

    assert_eq!(summary.ticks, 4);
    assert_eq!(summary.last_state.to_string(), "00:30:00");
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(2000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(2100), "{elapsed:?}");
    assert_eq!(output(surface), "00:11:30\r00:30:00\n");
}
