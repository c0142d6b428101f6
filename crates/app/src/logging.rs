//! Tracing setup.
//!
//! Logs go to stderr so they never overwrite the clock on stdout.

use std::env;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "HOROLOGE_LOG";

/// Installs the global subscriber.
pub fn init(verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_filter(verbose: bool) -> EnvFilter {
    match env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => EnvFilter::new(value),
        _ if verbose => EnvFilter::new("debug"),
        _ => EnvFilter::new("info"),
    }
}
