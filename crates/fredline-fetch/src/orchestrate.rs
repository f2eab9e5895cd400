//! Bounded concurrent fan-out over windows.
//!
//! One logical task per window, at most `concurrency` running at once.
//! Windows are independent: a terminal failure neither cancels nor blocks
//! the others. Completion order is unconstrained; results land in a
//! pre-sized store keyed by window index and ordering is reconstructed
//! downstream by [`crate::assemble`].

use std::future::Future;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use fredline_types::{DateRange, Window};

use crate::{CancelToken, FetchError, FetchEvent, FetchObserver, RetryPolicy, WindowError, retry};

/// Outcome recorded for one window.
pub type WindowResult<P> = Result<P, WindowError>;

/// Fetches every window through the retry loop, at most `concurrency`
/// windows in flight at once.
///
/// Returns one slot per window, positioned by window index (window indices
/// are the windows' positions in `windows`, per the chunking contract).
/// Every slot is filled exactly once; a `None` slot surviving to assembly
/// indicates a bug here.
pub async fn run_windows<P, F, Fut>(
    windows: &[Window],
    fetch_fn: F,
    policy: &RetryPolicy,
    concurrency: usize,
    observer: &dyn FetchObserver,
    cancel: &CancelToken,
) -> Vec<Option<WindowResult<P>>>
where
    F: Fn(DateRange) -> Fut,
    Fut: Future<Output = Result<P, FetchError>>,
{
    let mut results: Vec<Option<WindowResult<P>>> = Vec::with_capacity(windows.len());
    results.resize_with(windows.len(), || None);

    let fetch_fn = &fetch_fn;
    let mut completions = stream::iter(windows.iter().copied())
        .map(move |window| async move {
            (
                window.index,
                fetch_window(window, fetch_fn, policy, observer, cancel).await,
            )
        })
        .buffer_unordered(concurrency.max(1));

    while let Some((index, result)) = completions.next().await {
        results[index] = Some(result);
    }

    results
}

/// Runs one window to its terminal outcome, emitting observer events.
async fn fetch_window<P, F, Fut>(
    window: Window,
    fetch_fn: &F,
    policy: &RetryPolicy,
    observer: &dyn FetchObserver,
    cancel: &CancelToken,
) -> WindowResult<P>
where
    F: Fn(DateRange) -> Fut,
    Fut: Future<Output = Result<P, FetchError>>,
{
    if cancel.is_cancelled() {
        observer.on_event(&FetchEvent::WindowCancelled {
            index: window.index,
        });
        return Err(WindowError::Cancelled);
    }

    observer.on_event(&FetchEvent::WindowStarted {
        index: window.index,
        range: window.range,
    });
    debug!(window = window.index, range = %window.range, "window started");

    let mut failed_attempts = 0u32;
    let result = retry::run_with_retry(
        policy,
        cancel,
        |attempt, error, delay| {
            failed_attempts = attempt;
            observer.on_event(&FetchEvent::AttemptFailed {
                index: window.index,
                attempt,
                transient: error.is_transient(),
                message: error.to_string(),
            });
            match delay {
                Some(delay) => debug!(
                    window = window.index,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %error,
                    "attempt failed; retrying"
                ),
                None => debug!(
                    window = window.index,
                    attempt,
                    error = %error,
                    "attempt failed; giving up"
                ),
            }
        },
        || fetch_fn(window.range),
    )
    .await;

    match &result {
        Ok(_) => {
            let attempts = failed_attempts + 1;
            observer.on_event(&FetchEvent::WindowSucceeded {
                index: window.index,
                attempts,
            });
            debug!(window = window.index, attempts, "window succeeded");
        }
        Err(WindowError::Cancelled) => {
            observer.on_event(&FetchEvent::WindowCancelled {
                index: window.index,
            });
        }
        Err(error) => {
            observer.on_event(&FetchEvent::WindowFailed {
                index: window.index,
                attempts: failed_attempts,
            });
            warn!(window = window.index, range = %window.range, error = %error, "window failed");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoopObserver;
    use chrono::{Datelike, NaiveDate};
    use fredline_types::{DateRange, WindowPolicy};
    use std::sync::Mutex;
    use std::time::Duration;

    fn quarter_windows() -> Vec<Window> {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        )
        .unwrap();
        WindowPolicy::CalendarMonth.windows(range)
    }

    fn instant_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            backoff_base: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Observer that records every event it sees.
    #[derive(Debug, Default)]
    struct Recording(Mutex<Vec<FetchEvent>>);

    impl FetchObserver for Recording {
        fn on_event(&self, event: &FetchEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[tokio::test]
    async fn test_one_result_per_window_with_mixed_outcomes() {
        let windows = quarter_windows();
        // February fails permanently; the other windows succeed.
        let failing = windows[1].range;

        for concurrency in [1, 2, 8] {
            let results = run_windows(
                &windows,
                |range| async move {
                    if range == failing {
                        Err(FetchError::fatal("HTTP 400"))
                    } else {
                        Ok(range.start)
                    }
                },
                &instant_policy(3),
                concurrency,
                &NoopObserver,
                &CancelToken::new(),
            )
            .await;

            assert_eq!(results.len(), 3);
            assert_eq!(results[0], Some(Ok(windows[0].range.start)));
            assert!(matches!(results[1], Some(Err(WindowError::Fatal(_)))));
            assert_eq!(results[2], Some(Ok(windows[2].range.start)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_keyed_by_index_under_reordered_completion() {
        let windows = quarter_windows();

        // Earlier windows finish last.
        let results = run_windows(
            &windows,
            |range| async move {
                let delay = match range.start.month0() {
                    0 => 300,
                    1 => 200,
                    _ => 1,
                };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok(range.start)
            },
            &instant_policy(1),
            8,
            &NoopObserver,
            &CancelToken::new(),
        )
        .await;

        let starts: Vec<_> = results
            .into_iter()
            .map(|slot| slot.unwrap().unwrap())
            .collect();
        assert_eq!(
            starts,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn test_precancelled_token_marks_every_window_cancelled() {
        let windows = quarter_windows();
        let cancel = CancelToken::new();
        cancel.cancel();

        let results = run_windows(
            &windows,
            |range| async move { Ok::<_, FetchError>(range.start) },
            &instant_policy(3),
            2,
            &NoopObserver,
            &cancel,
        )
        .await;

        assert!(results
            .iter()
            .all(|slot| matches!(slot, Some(Err(WindowError::Cancelled)))));
    }

    #[tokio::test]
    async fn test_event_sequence_for_retried_window() {
        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        let windows = WindowPolicy::CalendarMonth.windows(range);
        let observer = Recording::default();
        let calls = std::sync::atomic::AtomicU32::new(0);

        let results = run_windows(
            &windows,
            |_| {
                let n = calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst) + 1;
                async move {
                    if n < 2 {
                        Err(FetchError::transient("timeout"))
                    } else {
                        Ok(n)
                    }
                }
            },
            &instant_policy(3),
            1,
            &observer,
            &CancelToken::new(),
        )
        .await;

        assert_eq!(results[0], Some(Ok(2)));
        let events = observer.0.into_inner().unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], FetchEvent::WindowStarted { index: 0, .. }));
        assert!(matches!(
            events[1],
            FetchEvent::AttemptFailed {
                index: 0,
                attempt: 1,
                transient: true,
                ..
            }
        ));
        assert!(matches!(
            events[2],
            FetchEvent::WindowSucceeded {
                index: 0,
                attempts: 2
            }
        ));
    }
}
