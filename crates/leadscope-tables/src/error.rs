//! Errors raised while loading market tables.

use std::path::PathBuf;
use thiserror::Error;

use crate::TableKind;

/// Errors that can occur when loading or validating market tables.
#[derive(Error, Debug)]
pub enum TablesError {
    /// Failed to read a tables file.
    #[error("Failed to read tables file '{path}': {source}")]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Tables JSON could not be parsed.
    #[error("Invalid tables JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A weight is negative, not finite, or outside [0, 1] for a fraction table.
    #[error("Invalid {kind} weight {weight} for '{label}'")]
    InvalidWeight {
        /// Table the weight belongs to.
        kind: TableKind,
        /// Offending label.
        label: String,
        /// Offending weight.
        weight: f64,
    },

    /// The same label appears twice in one table.
    #[error("Duplicate {kind} label '{label}'")]
    DuplicateLabel {
        /// Table the label belongs to.
        kind: TableKind,
        /// Repeated label.
        label: String,
    },

    /// A fallback weight breaks the rules of its table.
    #[error("Invalid {kind} fallback weight {weight}")]
    InvalidFallback {
        /// Table the fallback applies to.
        kind: TableKind,
        /// Offending weight.
        weight: f64,
    },

    /// The fallback data source is not a row of the data source table.
    #[error("Fallback data source '{0}' is not in the data source table")]
    UnknownFallbackSource(String),

    /// Confidence factors do not bracket the expected case.
    #[error(
        "Invalid confidence range: expected 0 <= conservative <= 1 <= aggressive, \
         got {conservative} and {aggressive}"
    )]
    InvalidConfidence {
        /// Lower band factor.
        conservative: f64,
        /// Upper band factor.
        aggressive: f64,
    },
}
