//! TAM and ROI estimation engine for leadscope.
//!
//! Both estimators are pure, synchronous functions of their inputs. They
//! never fail: unknown labels fall back to default weights and zero
//! denominators produce `0` or [`BreakEven::Unreachable`](leadscope_types::BreakEven).
//!
//! - [`TamEstimator`] / [`calculate_tam`] - Addressable market from segment selections
//! - [`calculate_roi`] - Funnel counts and profitability of an outreach campaign
//!
//! # Example
//!
//! ```
//! use leadscope_estimate::{calculate_roi, calculate_tam};
//! use leadscope_types::{RoiConfig, TamConfig};
//!
//! let tam = calculate_tam(
//!     &TamConfig::default()
//!         .with_industry("Technology")
//!         .with_role("CEO")
//!         .with_company_size("51-200"),
//! );
//! assert_eq!(tam.estimated_reachable, 70_980);
//!
//! let roi = calculate_roi(&RoiConfig::default());
//! assert_eq!(roi.funnel_breakdown.deals_closed, 6);
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod roi;
mod rounding;
mod tam;

pub use roi::calculate_roi;
pub use tam::{TamEstimator, calculate_tam};
