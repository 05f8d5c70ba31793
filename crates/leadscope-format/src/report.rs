//! Timestamped report envelopes.

use chrono::{DateTime, Utc};
use leadscope_types::{RoiConfig, RoiResult, TamConfig, TamResult};
use serde::{Deserialize, Serialize};

/// A TAM estimate together with the selection that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TamReport {
    /// When the estimate was produced.
    pub generated_at: DateTime<Utc>,
    /// Selection the estimate was run on.
    pub config: TamConfig,
    /// Estimated market.
    pub result: TamResult,
}

impl TamReport {
    /// Creates a report stamped with the current time.
    #[must_use]
    pub fn new(config: TamConfig, result: TamResult) -> Self {
        Self {
            generated_at: Utc::now(),
            config,
            result,
        }
    }

    /// Replaces the report timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

/// An ROI estimate together with the campaign inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiReport {
    /// When the estimate was produced.
    pub generated_at: DateTime<Utc>,
    /// Campaign inputs.
    pub config: RoiConfig,
    /// Estimated funnel and returns.
    pub result: RoiResult,
}

impl RoiReport {
    /// Creates a report stamped with the current time.
    #[must_use]
    pub fn new(config: RoiConfig, result: RoiResult) -> Self {
        Self {
            generated_at: Utc::now(),
            config,
            result,
        }
    }

    /// Replaces the report timestamp.
    #[must_use]
    pub const fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}
