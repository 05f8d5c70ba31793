//! TAM command implementation.
//!
//! This module resolves the segment selection, either from flags or from
//! interactive prompts, and writes the estimated market.

use crate::display;
use anyhow::{Context, Result};
use inquire::{MultiSelect, Select};
use leadscope_lib::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// Segment selection as typed on the command line.
pub(crate) struct Selection {
    pub(crate) industries: Vec<String>,
    pub(crate) roles: Vec<String>,
    pub(crate) sizes: Vec<String>,
    pub(crate) source: String,
    pub(crate) region: String,
    pub(crate) multiplier: Option<f64>,
}

impl Selection {
    /// Builds the estimator input, mapping labels to their catalog spelling.
    fn into_config(self, tables: &MarketTables) -> TamConfig {
        let mut config = TamConfig::new(resolve(tables, TableKind::DataSources, &self.source))
            .with_region(resolve_region(tables, &self.region));

        for label in non_blank(&self.industries) {
            config = config.with_industry(resolve(tables, TableKind::Industries, label));
        }
        for label in non_blank(&self.roles) {
            config = config.with_role(resolve(tables, TableKind::Roles, label));
        }
        for label in non_blank(&self.sizes) {
            config = config.with_company_size(resolve(tables, TableKind::CompanySizes, label));
        }
        if let Some(multiplier) = self.multiplier {
            config = config.with_custom_multiplier(multiplier);
        }

        config
    }
}

/// Trimmed labels, skipping blank ones.
fn non_blank(labels: &[String]) -> impl Iterator<Item = &str> {
    labels.iter().map(|label| label.trim()).filter(|label| !label.is_empty())
}

/// Returns the catalog spelling of a label, or the label itself if unknown.
fn resolve(tables: &MarketTables, kind: TableKind, input: &str) -> String {
    if let Some(label) = tables.table(kind).canonical(input) {
        return label.to_string();
    }
    warn!("Unknown {kind} '{input}', using the fallback weight");
    input.to_string()
}

fn resolve_region(tables: &MarketTables, input: &str) -> String {
    if let Some(region) = tables
        .regions()
        .iter()
        .find(|region| region.eq_ignore_ascii_case(input))
    {
        return region.clone();
    }
    warn!("Unknown region '{input}'");
    input.to_string()
}

fn catalog(tables: &MarketTables, kind: TableKind) -> Vec<String> {
    tables.table(kind).labels().map(str::to_string).collect()
}

/// Replaces the flag selection with answers to interactive prompts.
fn prompt_selection(tables: &MarketTables, flags: Selection) -> Result<Selection> {
    let industries = MultiSelect::new("Industries:", catalog(tables, TableKind::Industries))
        .prompt()
        .context("Industry selection cancelled")?;
    let roles = MultiSelect::new("Roles:", catalog(tables, TableKind::Roles))
        .prompt()
        .context("Role selection cancelled")?;
    let sizes = MultiSelect::new("Company sizes:", catalog(tables, TableKind::CompanySizes))
        .prompt()
        .context("Company size selection cancelled")?;
    let source = Select::new("Data source:", catalog(tables, TableKind::DataSources))
        .prompt()
        .context("Data source selection cancelled")?;
    let region = Select::new("Region:", tables.regions().to_vec())
        .prompt()
        .context("Region selection cancelled")?;

    Ok(Selection {
        industries,
        roles,
        sizes,
        source,
        region,
        multiplier: flags.multiplier,
    })
}

/// Estimate and write the TAM for a segment selection.
pub(crate) fn tam(
    tables: &MarketTables,
    selection: Selection,
    interactive: bool,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let selection = if interactive {
        prompt_selection(tables, selection)?
    } else {
        selection
    };

    let config = selection.into_config(tables);
    config.validate()?;

    let result = TamEstimator::new(tables).estimate(&config);
    info!(
        base = result.base_market_size,
        reachable = result.estimated_reachable,
        "estimated tam"
    );

    display::write_tam(&TamReport::new(config, result), format, output)
}
