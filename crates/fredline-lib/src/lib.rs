//! Rust library for downloading long FRED observation series.
//!
//! This is a facade crate that re-exports functionality from the fredline
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use fredline_lib::prelude::*;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FredClient::new(ClientConfig::new(std::env::var("FRED_API_KEY")?))?;
//!     let series = Series::new("SP500");
//!
//!     let range = DateRange::new(
//!         NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
//!     )?;
//!
//!     let pages = fetch_observations(
//!         &client,
//!         &series,
//!         range,
//!         &FetchOptions::default(),
//!         &NoopObserver,
//!         &CancelToken::new(),
//!     )
//!     .await?;
//!
//!     println!("Downloaded {} observations", flatten_pages(pages).len());
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fredline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use fredline_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use fredline_fetch::{
    CancelToken, ClientConfig, FetchError, FetchEvent, FetchObserver, FetchOptions, FredClient,
    NoopObserver, RetryPolicy, SeriesFetchError, WindowError, WindowResult, fetch_observations,
    fetch_range, flatten_pages,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use fredline_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use fredline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use fredline_types::{
        DateRange, DateRangeError, Frequency, Observation, ObservationsPage, Series, Window,
        WindowPolicy,
    };

    #[cfg(feature = "fetch")]
    pub use fredline_fetch::{
        CancelToken, ClientConfig, FetchError, FetchEvent, FetchObserver, FetchOptions,
        FredClient, NoopObserver, RetryPolicy, SeriesFetchError, WindowError, fetch_observations,
        fetch_range, flatten_pages,
    };

    #[cfg(feature = "format")]
    pub use fredline_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
