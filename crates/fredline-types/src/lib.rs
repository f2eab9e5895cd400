//! Core types for the fredline FRED series downloader.
//!
//! This crate provides the fundamental data structures used throughout
//! fredline:
//!
//! - [`DateRange`] - Inclusive date range for a series request
//! - [`Window`] / [`WindowPolicy`] - Chunking of a range into per-request windows
//! - [`Series`] - FRED series identity with observation frequency
//! - [`Observation`] / [`ObservationsPage`] - Decoded observation payloads

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fredline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod observation;
mod series;
mod window;

pub use date_range::DateRange;
pub use error::DateRangeError;
pub use observation::{Observation, ObservationsPage};
pub use series::{Frequency, FrequencyParseError, Series};
pub use window::{Window, WindowIter, WindowPolicy};
