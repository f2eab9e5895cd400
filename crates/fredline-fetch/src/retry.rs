//! Retry loop with exponential backoff.
//!
//! The loop is deliberately decoupled from any concrete transport: it runs
//! an injected async call, inspects the [`FetchError`] classification of
//! each failure, and sleeps between attempts. This keeps the retry
//! semantics unit-testable with fake calls and no network.

use std::future::Future;
use std::time::Duration;

use crate::{CancelToken, FetchError, WindowError};

/// Retry budget and backoff configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first. Values below 1 are
    /// treated as 1.
    pub max_attempts: u32,
    /// Base delay for exponential backoff.
    pub backoff_base: Duration,
    /// Upper bound on any single backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_base: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Returns the backoff delay after failed attempt `attempt` (1-indexed):
    /// `backoff_base * 2^(attempt - 1)`, capped at `max_delay`.
    #[must_use]
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp = 1u32 << attempt.saturating_sub(1).min(16);
        self.backoff_base.saturating_mul(exp).min(self.max_delay)
    }
}

/// Runs `call` until it succeeds, fails fatally, or the retry budget is
/// spent.
///
/// `on_failure` is invoked for every failed attempt with the attempt
/// number, the error, and the delay before the next attempt (`None` when
/// no retry follows). Transient failures sleep for the provider's
/// retry-after hint when present, otherwise the policy's computed backoff.
/// Fatal failures return immediately without consuming retries.
///
/// Cancellation is honored before the first attempt and during backoff
/// sleeps; an attempt already in flight runs to completion.
///
/// # Errors
///
/// Returns [`WindowError::Exhausted`] wrapping the last transient error
/// once `max_attempts` attempts have failed, [`WindowError::Fatal`] on the
/// first fatal error, or [`WindowError::Cancelled`].
pub async fn run_with_retry<P, F, Fut>(
    policy: &RetryPolicy,
    cancel: &CancelToken,
    mut on_failure: impl FnMut(u32, &FetchError, Option<Duration>),
    mut call: F,
) -> Result<P, WindowError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<P, FetchError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1u32;

    if cancel.is_cancelled() {
        return Err(WindowError::Cancelled);
    }

    loop {
        let error = match call().await {
            Ok(payload) => return Ok(payload),
            Err(error) => error,
        };

        let delay = if error.is_transient() && attempt < max_attempts {
            Some(error.retry_after().unwrap_or_else(|| policy.backoff_delay(attempt)))
        } else {
            None
        };
        on_failure(attempt, &error, delay);

        let Some(delay) = delay else {
            return Err(if error.is_transient() {
                WindowError::Exhausted {
                    attempts: attempt,
                    last: error,
                }
            } else {
                WindowError::Fatal(error)
            });
        };

        tokio::select! {
            () = tokio::time::sleep(delay) => {}
            () = cancel.cancelled() => return Err(WindowError::Cancelled),
        }
        attempt += 1;
    }
}
