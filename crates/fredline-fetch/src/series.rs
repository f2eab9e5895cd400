//! High-level windowed series download.
//!
//! Ties the pipeline together: chunk the range into windows, fan out
//! through the retry loop with bounded concurrency, and reassemble the
//! per-window payloads in chronological order.

use std::future::Future;

use fredline_types::{DateRange, Observation, ObservationsPage, Series, WindowPolicy};

use crate::{
    CancelToken, FetchError, FetchObserver, FredClient, RetryPolicy, SeriesFetchError, assemble,
    orchestrate::run_windows,
};

/// Options for a windowed range fetch.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// How the range is split into per-request windows.
    pub window_policy: WindowPolicy,
    /// Maximum windows in flight at once. Values below 1 are treated as 1.
    pub concurrency: usize,
    /// Retry budget and backoff for each window.
    pub retry: RetryPolicy,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            window_policy: WindowPolicy::CalendarMonth,
            concurrency: 8,
            retry: RetryPolicy::default(),
        }
    }
}

/// Fetches every window of `range` through `fetch_fn` and returns the
/// per-window payloads in chronological order.
///
/// This is the generic pipeline surface: `fetch_fn` owns all protocol
/// concerns (request construction, the network call, and classifying the
/// outcome into a [`FetchError`]); the pipeline treats payloads as opaque.
/// All windows run to completion even when one fails, so a single call
/// reports the lowest-index failure deterministically.
///
/// # Errors
///
/// Returns the lowest-index terminal window failure, or an internal
/// invariant violation from assembly.
pub async fn fetch_range<P, F, Fut>(
    range: DateRange,
    fetch_fn: F,
    options: &FetchOptions,
    observer: &dyn FetchObserver,
    cancel: &CancelToken,
) -> Result<Vec<P>, SeriesFetchError>
where
    F: Fn(DateRange) -> Fut,
    Fut: Future<Output = Result<P, FetchError>>,
{
    let windows = options.window_policy.windows(range);
    let results = run_windows(
        &windows,
        fetch_fn,
        &options.retry,
        options.concurrency,
        observer,
        cancel,
    )
    .await;
    assemble(&windows, results)
}

/// Downloads a series over `range`, one page per window.
///
/// # Errors
///
/// Returns the lowest-index terminal window failure.
pub async fn fetch_observations(
    client: &FredClient,
    series: &Series,
    range: DateRange,
    options: &FetchOptions,
    observer: &dyn FetchObserver,
    cancel: &CancelToken,
) -> Result<Vec<ObservationsPage>, SeriesFetchError> {
    fetch_range(
        range,
        |window| client.observations(series, window),
        options,
        observer,
        cancel,
    )
    .await
}

/// Concatenates per-window pages into one chronological observation list.
///
/// Ordering is inherited from the window order; nothing is re-sorted.
#[must_use]
pub fn flatten_pages(pages: Vec<ObservationsPage>) -> Vec<Observation> {
    pages
        .into_iter()
        .flat_map(|page| page.observations)
        .collect()
}
