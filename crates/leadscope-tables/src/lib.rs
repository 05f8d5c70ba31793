//! Market weight tables for the leadscope TAM estimator.
//!
//! This crate holds the categorical constants the estimator sizes markets
//! with, kept apart from the algorithm so they can be revised or swapped:
//!
//! - [`MarketTables`] - Industry, role, company-size and data-source weights
//! - [`WeightTable`] - An ordered `label -> weight` table
//! - [`Fallbacks`] - Weights used for labels missing from a table
//! - [`ConfidenceRange`] - Factors of the reported confidence band
//!
//! # Example
//!
//! ```
//! use leadscope_tables::{MarketTables, TableKind};
//!
//! let tables = MarketTables::global();
//!
//! assert_eq!(tables.industries().get("Technology"), Some(18_000_000.0));
//! assert_eq!(tables.weight_or_fallback(TableKind::Roles, "Chief Vibes Officer"), 400_000.0);
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod tables;
mod weights;

pub use error::TablesError;
pub use tables::{ConfidenceRange, Fallbacks, MarketTables, MarketTablesBuilder, TableKind};
pub use weights::{WeightEntry, WeightTable};
