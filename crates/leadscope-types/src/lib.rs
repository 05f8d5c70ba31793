//! Core types for the leadscope estimators.
//!
//! This crate provides the value types exchanged with the estimation engine:
//!
//! - [`TamConfig`] / [`TamResult`] - Market-segment selections and the sized market
//! - [`RoiConfig`] / [`RoiResult`] - Campaign funnel inputs and profitability metrics
//! - [`OutreachFrequency`] - Cadence of an outreach campaign
//! - [`BreakEven`] - Break-even lead count, or the unreachable sentinel
//! - [`SelectionError`] - Rejection of an incomplete TAM selection

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod frequency;
mod roi;
mod tam;

pub use error::{Dimension, SelectionError};
pub use frequency::{FrequencyParseError, OutreachFrequency};
pub use roi::{BreakEven, CostBreakdown, FunnelBreakdown, RoiConfig, RoiResult, RoiWarning};
pub use tam::{BreakdownEntry, ConfidenceInterval, TamBreakdown, TamConfig, TamResult};
