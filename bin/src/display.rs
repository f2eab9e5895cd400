//! Display utilities and output formatting for the fredline CLI.

use anyhow::Result;
use clap::ValueEnum;
use fredline_lib::prelude::*;
use indicatif::ProgressBar;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Output format for downloaded data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write observations to a file in the specified format.
pub(crate) fn write_observations(
    observations: &[Observation],
    output: &Path,
    format: Format,
) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_observations(observations, writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_observations(observations, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_observations(observations, writer)?,
    }

    Ok(())
}

/// Drives the progress bar from fetch pipeline events.
///
/// The bar advances once per finished window regardless of outcome, so it
/// reaches its length even when some windows fail.
pub(crate) struct ProgressObserver {
    bar: ProgressBar,
    failed_attempts: AtomicU64,
}

impl ProgressObserver {
    pub(crate) const fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            failed_attempts: AtomicU64::new(0),
        }
    }

    /// Number of failed attempts observed across all windows.
    pub(crate) fn failed_attempts(&self) -> u64 {
        self.failed_attempts.load(Ordering::Relaxed)
    }
}

impl FetchObserver for ProgressObserver {
    fn on_event(&self, event: &FetchEvent) {
        match event {
            FetchEvent::AttemptFailed { .. } => {
                self.failed_attempts.fetch_add(1, Ordering::Relaxed);
            }
            FetchEvent::WindowSucceeded { .. }
            | FetchEvent::WindowFailed { .. }
            | FetchEvent::WindowCancelled { .. } => self.bar.inc(1),
            FetchEvent::WindowStarted { .. } => {}
        }
    }
}
