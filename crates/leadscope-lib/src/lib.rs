//! TAM and ROI estimation library for outbound sales planning.
//!
//! This is a facade crate that re-exports functionality from the leadscope
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use leadscope_lib::prelude::*;
//!
//! let config = TamConfig::new("LinkedIn")
//!     .with_industry("Technology")
//!     .with_role("CEO")
//!     .with_company_size("51-200")
//!     .with_region("US");
//! config.validate()?;
//!
//! let tam = calculate_tam(&config);
//! assert_eq!(tam.base_market_size, 109_200);
//!
//! let roi = calculate_roi(&RoiConfig::default());
//! assert_eq!(roi.roi, 395.87);
//! # Ok::<(), SelectionError>(())
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use leadscope_types::*;

// Re-export weight tables
pub use leadscope_tables::{
    ConfidenceRange, Fallbacks, MarketTables, MarketTablesBuilder, TableKind, TablesError,
    WeightEntry, WeightTable,
};

// Re-export estimators
pub use leadscope_estimate::{TamEstimator, calculate_roi, calculate_tam};

// Re-export formatters
#[cfg(feature = "format")]
pub use leadscope_format::{
    FormatError, Formatter, OutputFormat, RoiReport, TamReport, TextFormatter, group_thousands,
};

#[cfg(feature = "csv")]
pub use leadscope_format::CsvFormatter;

#[cfg(feature = "json")]
pub use leadscope_format::JsonFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use leadscope_lib::prelude::*;
/// ```
pub mod prelude {
    pub use leadscope_types::{
        BreakEven, Dimension, OutreachFrequency, RoiConfig, RoiResult, SelectionError, TamConfig,
        TamResult,
    };

    pub use leadscope_tables::{MarketTables, TableKind};

    pub use leadscope_estimate::{TamEstimator, calculate_roi, calculate_tam};

    #[cfg(feature = "format")]
    pub use leadscope_format::{Formatter, OutputFormat, RoiReport, TamReport, TextFormatter};

    #[cfg(feature = "csv")]
    pub use leadscope_format::CsvFormatter;

    #[cfg(feature = "json")]
    pub use leadscope_format::JsonFormatter;
}
