//! Plan command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fredline_lib::prelude::*;

/// Print the request windows a date range splits into.
pub(crate) fn plan(start_str: &str, end_str: Option<&str>, window_days: Option<u32>) -> Result<()> {
    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d")
        .with_context(|| format!("Invalid start date: {start_str}"))?;
    let end = match end_str {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid end date: {s}"))?,
        None => chrono::Utc::now().date_naive(),
    };

    let range = DateRange::new(start, end)?;
    let policy = window_days.map_or(WindowPolicy::CalendarMonth, WindowPolicy::FixedDays);
    let windows = policy.windows(range);

    println!("{:<8} {:<12} {:<12} {:>5}", "Window", "Start", "End", "Days");
    for window in &windows {
        println!(
            "{:<8} {:<12} {:<12} {:>5}",
            window.index,
            window.range.start,
            window.range.end,
            window.range.total_days()
        );
    }
    println!(
        "\n{} windows covering {} days",
        windows.len(),
        range.total_days()
    );

    Ok(())
}
