//! Total addressable market configuration and results.

use serde::{Deserialize, Serialize};

use crate::{Dimension, SelectionError};

/// Market-segment selections for a TAM estimate.
///
/// Labels are free text: anything outside the known tables is sized with
/// the per-dimension fallback weight rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TamConfig {
    /// Selected industry labels.
    pub industries: Vec<String>,
    /// Selected role labels.
    pub roles: Vec<String>,
    /// Selected company-size bucket labels.
    pub company_sizes: Vec<String>,
    /// Region labels. Only the first entry is consulted.
    pub geographic_filters: Vec<String>,
    /// Data source that determines the reachable fraction.
    pub data_source: String,
    /// Optional positive scaling factor applied to the base market.
    pub custom_multiplier: Option<f64>,
}

impl TamConfig {
    /// Creates an empty selection for the given data source.
    #[must_use]
    pub fn new(data_source: impl Into<String>) -> Self {
        Self {
            industries: Vec::new(),
            roles: Vec::new(),
            company_sizes: Vec::new(),
            geographic_filters: Vec::new(),
            data_source: data_source.into(),
            custom_multiplier: None,
        }
    }

    /// Adds an industry label unless it is already selected.
    #[must_use]
    pub fn with_industry(mut self, label: impl Into<String>) -> Self {
        push_unique(&mut self.industries, label.into());
        self
    }

    /// Adds a role label unless it is already selected.
    #[must_use]
    pub fn with_role(mut self, label: impl Into<String>) -> Self {
        push_unique(&mut self.roles, label.into());
        self
    }

    /// Adds a company-size label unless it is already selected.
    #[must_use]
    pub fn with_company_size(mut self, label: impl Into<String>) -> Self {
        push_unique(&mut self.company_sizes, label.into());
        self
    }

    /// Replaces the geographic filter with a single region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.geographic_filters = vec![region.into()];
        self
    }

    /// Sets the data source label.
    #[must_use]
    pub fn with_data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = data_source.into();
        self
    }

    /// Sets the custom multiplier.
    #[must_use]
    pub fn with_custom_multiplier(mut self, multiplier: f64) -> Self {
        self.custom_multiplier = Some(multiplier);
        self
    }

    /// Returns the region the estimate is framed for, if any.
    #[must_use]
    pub fn primary_region(&self) -> Option<&str> {
        self.geographic_filters.first().map(String::as_str)
    }

    /// Returns the selected labels for a dimension.
    #[must_use]
    pub fn labels(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Industry => &self.industries,
            Dimension::Role => &self.roles,
            Dimension::CompanySize => &self.company_sizes,
        }
    }

    /// Checks that every required dimension has at least one label.
    ///
    /// The estimator itself accepts empty selections (they size to zero);
    /// callers use this to refuse such input before estimating.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Empty`] naming the first empty dimension.
    pub fn validate(&self) -> Result<(), SelectionError> {
        Dimension::all()
            .iter()
            .copied()
            .find(|dimension| self.labels(*dimension).is_empty())
            .map_or(Ok(()), |dimension| Err(SelectionError::Empty(dimension)))
    }
}

impl Default for TamConfig {
    fn default() -> Self {
        Self::new("LinkedIn").with_region("US")
    }
}

fn push_unique(labels: &mut Vec<String>, label: String) {
    if !labels.contains(&label) {
        labels.push(label);
    }
}

/// Range around the reachable estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Conservative bound.
    pub lower: u64,
    /// Aggressive bound.
    pub upper: u64,
}

impl ConfidenceInterval {
    /// Returns true if `value` lies within the interval.
    #[must_use]
    pub const fn contains(&self, value: u64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// A single labelled value of a breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// Selected label.
    pub label: String,
    /// Population attributed to the label.
    pub value: u64,
}

impl BreakdownEntry {
    /// Creates a new breakdown entry.
    #[must_use]
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Per-dimension breakdowns, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TamBreakdown {
    /// Reachable population per industry.
    pub by_industry: Vec<BreakdownEntry>,
    /// Reachable population per role.
    pub by_role: Vec<BreakdownEntry>,
    /// Share of the base market per company size.
    pub by_company_size: Vec<BreakdownEntry>,
}

impl TamBreakdown {
    /// Returns the entries for a dimension.
    #[must_use]
    pub fn entries(&self, dimension: Dimension) -> &[BreakdownEntry] {
        match dimension {
            Dimension::Industry => &self.by_industry,
            Dimension::Role => &self.by_role,
            Dimension::CompanySize => &self.by_company_size,
        }
    }

    /// Looks up the value recorded for a label.
    #[must_use]
    pub fn value(&self, dimension: Dimension, label: &str) -> Option<u64> {
        self.entries(dimension)
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value)
    }
}

/// Result of a TAM estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TamResult {
    /// Population before the data-source reachability adjustment.
    pub base_market_size: u64,
    /// Population reachable through the selected data source.
    pub estimated_reachable: u64,
    /// Conservative and aggressive bounds around the reachable estimate.
    pub confidence_interval: ConfidenceInterval,
    /// Chart breakdowns.
    pub breakdown: TamBreakdown,
}
