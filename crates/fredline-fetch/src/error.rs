//! Error types for the fetch pipeline.
//!
//! Errors are layered: [`FetchError`] classifies a single attempt,
//! [`WindowError`] is the terminal outcome of one window after the retry
//! loop has run its course, and [`SeriesFetchError`] is the single failure
//! a caller of the whole pipeline sees.

use std::time::Duration;

use fredline_types::{DateRange, DateRangeError};
use thiserror::Error;

/// Classification of a single failed fetch attempt.
///
/// The injected transport is responsible for producing the right variant;
/// the retry loop only ever inspects the classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// A failure that retrying may fix: timeout, connection reset, 5xx
    /// response, or rate limiting.
    #[error("transient: {message}")]
    Transient {
        /// Human-readable description of the failure.
        message: String,
        /// Provider-indicated wait before the next attempt (Retry-After).
        retry_after: Option<Duration>,
    },

    /// A failure that retrying cannot fix: client error, authentication
    /// failure, or a malformed response body.
    #[error("fatal: {message}")]
    Fatal {
        /// Human-readable description of the failure.
        message: String,
    },
}

impl FetchError {
    /// Creates a transient error with no provider backoff hint.
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
            retry_after: None,
        }
    }

    /// Creates a transient rate-limit error carrying the provider's
    /// requested wait, when it sent one.
    pub fn rate_limited(message: impl Into<String>, retry_after: Option<Duration>) -> Self {
        Self::Transient {
            message: message.into(),
            retry_after,
        }
    }

    /// Creates a fatal error.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
        }
    }

    /// Returns true if this failure is worth retrying.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }

    /// Returns the provider's backoff hint, if any.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Transient { retry_after, .. } => *retry_after,
            Self::Fatal { .. } => None,
        }
    }
}

/// Terminal outcome of one window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Every attempt in the retry budget failed with a transient error.
    #[error("retries exhausted after {attempts} attempts")]
    Exhausted {
        /// Number of attempts performed.
        attempts: u32,
        /// The last transient error observed.
        #[source]
        last: FetchError,
    },

    /// The first fatal error, returned without consuming further retries.
    #[error(transparent)]
    Fatal(FetchError),

    /// Cancellation was requested before the window completed.
    #[error("cancelled before completion")]
    Cancelled,
}

/// The single caller-visible failure for a whole range fetch.
///
/// When several windows fail, the error always describes the one with the
/// lowest index, so failure reporting is deterministic regardless of
/// completion order.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeriesFetchError {
    /// The requested range was invalid.
    #[error(transparent)]
    Range(#[from] DateRangeError),

    /// The lowest-index window that failed terminally.
    #[error("window {index} ({range}) failed")]
    Window {
        /// Index of the failed window.
        index: usize,
        /// Date range the window covered.
        range: DateRange,
        /// Why the window failed.
        #[source]
        source: WindowError,
    },

    /// No result was recorded for a window. Indicates an orchestrator bug.
    #[error("no result recorded for window {index}")]
    Incomplete {
        /// Index of the missing window.
        index: usize,
    },
}
