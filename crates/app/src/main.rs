//! Horologe - Main Entry Point
//!
//! Parses the command line, loads settings, and runs the clock window
//! until Ctrl-C or the configured tick limit.

mod cli;
mod logging;

use std::sync::Arc;

use clap::Parser;
use horologe_infrastructure::{SystemClock, to_json_stable};
use horologe_ui::{ClockWindow, TerminalSurface};

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = cli
        .resolve_settings(|key| std::env::var(key).ok())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "could not load settings");
        })?;

    if cli.print_config {
        print!("{}", to_json_stable(&settings)?);
        return Ok(());
    }

    let window = ClockWindow::new(settings, Arc::new(SystemClock::new()), TerminalSurface::stdout())?;

    // Run the UI loop (blocks until Ctrl-C or the tick limit)
    window.run(ctrl_c()).await?;

    Ok(())
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
