//! Output formatters for fredline observation data.
//!
//! - [`Formatter`] - Trait for writing observations to an output
//! - [`CsvFormatter`] - CSV output
//! - [`JsonFormatter`] - JSON array and NDJSON output

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fredline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
