//! Download command implementation.
//!
//! Splits the requested date range into windows, fetches them concurrently
//! with retries, and writes the reassembled observations to a file.

use crate::display::{Format, ProgressObserver, write_observations};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use fredline_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Download observations for a series.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn download(
    series_id: &str,
    start_str: &str,
    end_str: Option<&str>,
    frequency_str: &str,
    output: Option<PathBuf>,
    format: Format,
    concurrency: usize,
    max_attempts: u32,
    window_days: Option<u32>,
    api_key: Option<String>,
    quiet: bool,
) -> Result<()> {
    let api_key = match api_key {
        Some(key) => key,
        None => std::env::var("FRED_API_KEY")
            .context("FRED API key is missing: pass --api-key or set FRED_API_KEY")?,
    };

    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d")
        .with_context(|| format!("Invalid start date: {start_str}"))?;

    // Parse end date (default to today)
    let end = match end_str {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid end date: {s}"))?,
        None => chrono::Utc::now().date_naive(),
    };

    let range = DateRange::new(start, end)?;

    let frequency = frequency_str
        .parse::<Frequency>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let series = Series::new(series_id).with_frequency(frequency);

    let options = FetchOptions {
        window_policy: window_days.map_or(WindowPolicy::CalendarMonth, WindowPolicy::FixedDays),
        concurrency,
        retry: RetryPolicy {
            max_attempts,
            ..Default::default()
        },
    };

    let client = FredClient::new(ClientConfig::new(api_key))?;

    // Ctrl+C stops launching new windows; in-flight attempts finish.
    let cancel = CancelToken::new();
    let cancel_handle = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_handle.cancel();
        }
    });

    // Setup progress bar
    let window_count = options.window_policy.window_count(range) as u64;
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(window_count);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} windows ({percent}%) {msg}")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb.set_message(format!("{} {} -> {}", series.id(), start, end));
        pb
    };

    let observer = ProgressObserver::new(progress.clone());
    let pages = fetch_observations(&client, &series, range, &options, &observer, &cancel).await?;
    let observations = flatten_pages(pages);

    let failed_attempts = observer.failed_attempts();
    let finish_msg = if failed_attempts > 0 {
        format!(
            "Downloaded {} observations ({} attempts retried)",
            observations.len(),
            failed_attempts
        )
    } else {
        format!("Downloaded {} observations", observations.len())
    };
    progress.finish_with_message(finish_msg);

    // Determine output path (default to <series>.<format>)
    let output = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}.{}",
            series.id().to_lowercase(),
            format.extension()
        ))
    });
    write_observations(&observations, &output, format)?;

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
