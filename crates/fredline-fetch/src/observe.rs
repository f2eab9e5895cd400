//! Observation hooks for the fetch pipeline.
//!
//! The pipeline emits one event per window lifecycle transition and one per
//! failed attempt. Observers are optional; correctness never depends on a
//! subscriber being present.

use fredline_types::DateRange;

/// Events emitted by the fetch pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// A window's first attempt is about to start.
    WindowStarted {
        /// Window index.
        index: usize,
        /// Dates the window covers.
        range: DateRange,
    },

    /// An attempt failed. Transient failures are retried while budget
    /// remains; fatal failures end the window.
    AttemptFailed {
        /// Window index.
        index: usize,
        /// Attempt number (1-indexed).
        attempt: u32,
        /// Whether the failure was classified as transient.
        transient: bool,
        /// Description of the failure.
        message: String,
    },

    /// A window completed successfully.
    WindowSucceeded {
        /// Window index.
        index: usize,
        /// Total attempts performed, including the successful one.
        attempts: u32,
    },

    /// A window failed terminally: a fatal error, or its retry budget was
    /// exhausted.
    WindowFailed {
        /// Window index.
        index: usize,
        /// Total attempts performed.
        attempts: u32,
    },

    /// A window was abandoned because cancellation was requested.
    WindowCancelled {
        /// Window index.
        index: usize,
    },
}

/// Observer for [`FetchEvent`]s.
///
/// Events are emitted inline from fetch tasks, so implementations should
/// return quickly and must not block.
pub trait FetchObserver: Send + Sync {
    /// Called for every pipeline event.
    fn on_event(&self, event: &FetchEvent) {
        let _ = event;
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {}
