//! Report formatters for leadscope estimates.
//!
//! Estimates are wrapped in a timestamped report and written to any
//! [`std::io::Write`]:
//!
//! - [`TextFormatter`] - Aligned human-readable summary
//! - [`JsonFormatter`] - Compact or pretty JSON
//! - [`CsvFormatter`] - `section,label,value` rows

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(feature = "csv")]
mod csv;
mod formatter;
#[cfg(feature = "json")]
mod json;
mod report;
mod text;

#[cfg(feature = "csv")]
pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
#[cfg(feature = "json")]
pub use json::JsonFormatter;
pub use report::{RoiReport, TamReport};
pub use text::{TextFormatter, group_thousands};
