//! Windowed fetching of FRED observation series.
//!
//! This crate provides the download pipeline:
//!
//! - [`url::observations_url`] - Constructs FRED observation URLs
//! - [`FredClient`] - HTTP client with pooling and response classification
//! - [`RetryPolicy`] / [`run_with_retry`] - Exponential-backoff retry loop
//! - [`run_windows`] - Bounded concurrent fan-out over date windows
//! - [`assemble`] - Order-preserving reassembly of per-window results
//! - [`fetch_observations`] - End-to-end windowed series download

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fredline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assemble;
mod cancel;
mod client;
mod error;
mod observe;
mod orchestrate;
mod retry;
mod series;
pub mod url;

pub use assemble::assemble;
pub use cancel::CancelToken;
pub use client::{ClientConfig, FredClient};
pub use error::{FetchError, SeriesFetchError, WindowError};
pub use observe::{FetchEvent, FetchObserver, NoopObserver};
pub use orchestrate::{WindowResult, run_windows};
pub use retry::{RetryPolicy, run_with_retry};
pub use series::{FetchOptions, fetch_observations, fetch_range, flatten_pages};
