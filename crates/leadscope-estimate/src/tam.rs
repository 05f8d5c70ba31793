//! Total addressable market estimation.

use leadscope_tables::{MarketTables, TableKind};
use leadscope_types::{BreakdownEntry, ConfidenceInterval, TamBreakdown, TamConfig, TamResult};
use tracing::{debug, trace};

use crate::rounding::to_population;

/// Sizes markets from segment selections against a set of weight tables.
#[derive(Debug, Clone, Copy)]
pub struct TamEstimator<'a> {
    tables: &'a MarketTables,
}

impl<'a> TamEstimator<'a> {
    /// Creates an estimator over the given tables.
    #[must_use]
    pub const fn new(tables: &'a MarketTables) -> Self {
        Self { tables }
    }

    /// Returns the tables this estimator reads.
    #[must_use]
    pub const fn tables(&self) -> &'a MarketTables {
        self.tables
    }

    /// Estimates the addressable and reachable market for a selection.
    ///
    /// Industry and role selections are assumed to overlap, so the smaller
    /// of the two totals is taken as the population rather than their sum.
    /// Empty selections size to zero; see [`TamConfig::validate`].
    #[must_use]
    pub fn estimate(&self, config: &TamConfig) -> TamResult {
        let industries = self.weigh(TableKind::Industries, &config.industries);
        let roles = self.weigh(TableKind::Roles, &config.roles);
        let company_sizes = self.weigh(TableKind::CompanySizes, &config.company_sizes);

        let industry_total = total(&industries);
        let role_total = total(&roles);
        let company_size_total = total(&company_sizes);
        trace!(industry_total, role_total, company_size_total, "tam totals");

        let size_factor = if company_size_total == 0.0 {
            1.0
        } else {
            company_size_total
        };
        let base_market_size = industry_total.min(role_total)
            * size_factor
            * scaling_factor(config.custom_multiplier);

        let reachable_fraction = self
            .tables
            .weight_or_fallback(TableKind::DataSources, &config.data_source);
        let estimated_reachable = base_market_size * reachable_fraction;

        let band = self.tables.confidence();
        let confidence_interval = ConfidenceInterval {
            lower: to_population(estimated_reachable * band.conservative),
            upper: to_population(estimated_reachable * band.aggressive),
        };

        debug!(
            region = config.primary_region(),
            data_source = %config.data_source,
            base_market_size,
            estimated_reachable,
            "estimated tam"
        );

        TamResult {
            base_market_size: to_population(base_market_size),
            estimated_reachable: to_population(estimated_reachable),
            confidence_interval,
            breakdown: TamBreakdown {
                by_industry: breakdown(&industries, |weight| weight * reachable_fraction),
                by_role: breakdown(&roles, |weight| weight * reachable_fraction),
                by_company_size: breakdown(&company_sizes, |fraction| {
                    base_market_size * fraction
                }),
            },
        }
    }

    /// Resolves each selected label to its weight, in selection order.
    fn weigh<'c>(&self, kind: TableKind, labels: &'c [String]) -> Vec<(&'c str, f64)> {
        labels
            .iter()
            .map(|label| (label.as_str(), self.tables.weight_or_fallback(kind, label)))
            .collect()
    }
}

impl Default for TamEstimator<'static> {
    fn default() -> Self {
        Self::new(MarketTables::global())
    }
}

/// Estimates a TAM against the built-in tables.
#[must_use]
pub fn calculate_tam(config: &TamConfig) -> TamResult {
    TamEstimator::default().estimate(config)
}

fn total(weights: &[(&str, f64)]) -> f64 {
    weights.iter().map(|(_, weight)| weight).sum()
}

/// Returns the custom multiplier, or 1 when it is absent or not a positive number.
fn scaling_factor(custom_multiplier: Option<f64>) -> f64 {
    match custom_multiplier {
        Some(multiplier) if multiplier.is_finite() && multiplier > 0.0 => multiplier,
        Some(multiplier) => {
            debug!(multiplier, "ignoring non-positive custom multiplier");
            1.0
        }
        None => 1.0,
    }
}

/// Builds chart entries, keeping the first occurrence of a repeated label.
fn breakdown(weights: &[(&str, f64)], value: impl Fn(f64) -> f64) -> Vec<BreakdownEntry> {
    let mut entries: Vec<BreakdownEntry> = Vec::with_capacity(weights.len());
    for &(label, weight) in weights {
        if entries.iter().all(|entry| entry.label != label) {
            entries.push(BreakdownEntry::new(label, to_population(value(weight))));
        }
    }
    entries
}
