//! The market table registry.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{TablesError, WeightEntry, WeightTable};

/// Market tables JSON embedded at compile time.
const MARKET_TABLES_JSON: &str = include_str!("../data/market_tables.json");

/// Global market tables instance.
static TABLES: OnceLock<MarketTables> = OnceLock::new();

/// Identifies one of the weighted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Industry populations.
    Industries,
    /// Role populations.
    Roles,
    /// Company-size fractions.
    CompanySizes,
    /// Data-source reachable fractions.
    DataSources,
}

impl TableKind {
    /// Returns the table name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Industries => "industry",
            Self::Roles => "role",
            Self::CompanySizes => "company size",
            Self::DataSources => "data source",
        }
    }

    /// Returns true if weights of this table are fractions in [0, 1].
    #[must_use]
    pub const fn is_fraction(&self) -> bool {
        matches!(self, Self::CompanySizes | Self::DataSources)
    }

    /// Returns all table kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Industries,
            Self::Roles,
            Self::CompanySizes,
            Self::DataSources,
        ]
    }

    fn accepts(&self, weight: f64) -> bool {
        if self.is_fraction() {
            (0.0..=1.0).contains(&weight)
        } else {
            weight.is_finite() && weight >= 0.0
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weights used for labels a table does not know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fallbacks {
    /// Population for an unknown industry.
    pub industry: f64,
    /// Population for an unknown role.
    pub role: f64,
    /// Fraction for an unknown company size.
    pub company_size: f64,
    /// Data source whose fraction applies to unknown sources.
    pub data_source: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            industry: 5_000_000.0,
            role: 400_000.0,
            company_size: 0.2,
            data_source: "Custom".to_string(),
        }
    }
}

/// Multipliers of the reachable estimate that form the confidence band.
///
/// The reachable estimate itself is the expected case, so a valid range
/// satisfies `0 <= conservative <= 1 <= aggressive`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceRange {
    /// Lower band factor.
    pub conservative: f64,
    /// Upper band factor.
    pub aggressive: f64,
}

impl ConfidenceRange {
    /// Creates a new confidence range.
    #[must_use]
    pub const fn new(conservative: f64, aggressive: f64) -> Self {
        Self {
            conservative,
            aggressive,
        }
    }

    fn brackets_expected(&self) -> bool {
        (0.0..=1.0).contains(&self.conservative)
            && self.aggressive >= 1.0
            && self.aggressive.is_finite()
    }
}

impl Default for ConfidenceRange {
    fn default() -> Self {
        Self::new(0.65, 1.35)
    }
}

/// Raw JSON structure for deserialization.
#[derive(Debug, Deserialize)]
struct RawTables {
    industries: Vec<WeightEntry>,
    roles: Vec<WeightEntry>,
    company_sizes: Vec<WeightEntry>,
    data_sources: Vec<WeightEntry>,
    #[serde(default)]
    regions: Vec<String>,
    #[serde(default)]
    fallbacks: Fallbacks,
    #[serde(default)]
    confidence: ConfidenceRange,
}

/// Categorical weights the TAM estimator sizes markets with.
///
/// Every instance is validated on construction: populations are finite and
/// non-negative, fractions lie in [0, 1], the confidence band brackets the
/// expected case and the fallback data source exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketTables {
    industries: WeightTable,
    roles: WeightTable,
    company_sizes: WeightTable,
    data_sources: WeightTable,
    regions: Vec<String>,
    fallbacks: Fallbacks,
    confidence: ConfidenceRange,
    #[serde(skip)]
    data_source_fallback: f64,
}

impl MarketTables {
    /// Returns the global tables built from the embedded defaults.
    ///
    /// The tables are parsed lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        TABLES.get_or_init(|| {
            Self::from_json(MARKET_TABLES_JSON)
                .expect("embedded market_tables.json should be valid")
        })
    }

    /// Creates tables from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, TablesError> {
        let raw: RawTables = serde_json::from_str(json)?;

        let mut builder = MarketTablesBuilder::new()
            .fallbacks(raw.fallbacks)
            .confidence(raw.confidence);
        for (kind, rows) in [
            (TableKind::Industries, raw.industries),
            (TableKind::Roles, raw.roles),
            (TableKind::CompanySizes, raw.company_sizes),
            (TableKind::DataSources, raw.data_sources),
        ] {
            for row in rows {
                builder = builder.entry(kind, row.label, row.weight);
            }
        }
        for region in raw.regions {
            builder = builder.region(region);
        }

        builder.build()
    }

    /// Loads tables from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: &Path) -> Result<Self, TablesError> {
        let json = std::fs::read_to_string(path).map_err(|source| TablesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            industries = tables.industries.len(),
            roles = tables.roles.len(),
            "loaded market tables"
        );
        Ok(tables)
    }

    /// Starts building tables by hand.
    #[must_use]
    pub fn builder() -> MarketTablesBuilder {
        MarketTablesBuilder::new()
    }

    /// Returns the industry population table.
    #[must_use]
    pub const fn industries(&self) -> &WeightTable {
        &self.industries
    }

    /// Returns the role population table.
    #[must_use]
    pub const fn roles(&self) -> &WeightTable {
        &self.roles
    }

    /// Returns the company-size fraction table.
    #[must_use]
    pub const fn company_sizes(&self) -> &WeightTable {
        &self.company_sizes
    }

    /// Returns the data-source fraction table.
    #[must_use]
    pub const fn data_sources(&self) -> &WeightTable {
        &self.data_sources
    }

    /// Returns the table of the given kind.
    #[must_use]
    pub const fn table(&self, kind: TableKind) -> &WeightTable {
        match kind {
            TableKind::Industries => &self.industries,
            TableKind::Roles => &self.roles,
            TableKind::CompanySizes => &self.company_sizes,
            TableKind::DataSources => &self.data_sources,
        }
    }

    /// Returns the geographic filter catalog.
    #[must_use]
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Returns the fallback weights.
    #[must_use]
    pub const fn fallbacks(&self) -> &Fallbacks {
        &self.fallbacks
    }

    /// Returns the confidence band factors.
    #[must_use]
    pub const fn confidence(&self) -> ConfidenceRange {
        self.confidence
    }

    /// Returns the weight used for a label missing from the given table.
    #[must_use]
    pub const fn fallback_weight(&self, kind: TableKind) -> f64 {
        match kind {
            TableKind::Industries => self.fallbacks.industry,
            TableKind::Roles => self.fallbacks.role,
            TableKind::CompanySizes => self.fallbacks.company_size,
            TableKind::DataSources => self.data_source_fallback,
        }
    }

    /// Looks up a label, falling back to the table's default weight.
    #[must_use]
    pub fn weight_or_fallback(&self, kind: TableKind, label: &str) -> f64 {
        self.table(kind).get(label).unwrap_or_else(|| {
            debug!(table = %kind, label, "unknown label, using fallback weight");
            self.fallback_weight(kind)
        })
    }
}

impl Default for MarketTables {
    fn default() -> Self {
        Self::global().clone()
    }
}

/// Builder for [`MarketTables`], mostly useful for synthetic tables in tests.
#[derive(Debug, Clone, Default)]
pub struct MarketTablesBuilder {
    entries: Vec<(TableKind, WeightEntry)>,
    regions: Vec<String>,
    fallbacks: Fallbacks,
    confidence: ConfidenceRange,
}

impl MarketTablesBuilder {
    /// Creates a builder with default fallbacks and confidence factors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row to the table of the given kind.
    #[must_use]
    pub fn entry(mut self, kind: TableKind, label: impl Into<String>, weight: f64) -> Self {
        self.entries.push((kind, WeightEntry::new(label, weight)));
        self
    }

    /// Adds an industry population.
    #[must_use]
    pub fn industry(self, label: impl Into<String>, weight: f64) -> Self {
        self.entry(TableKind::Industries, label, weight)
    }

    /// Adds a role population.
    #[must_use]
    pub fn role(self, label: impl Into<String>, weight: f64) -> Self {
        self.entry(TableKind::Roles, label, weight)
    }

    /// Adds a company-size fraction.
    #[must_use]
    pub fn company_size(self, label: impl Into<String>, weight: f64) -> Self {
        self.entry(TableKind::CompanySizes, label, weight)
    }

    /// Adds a data-source reachable fraction.
    #[must_use]
    pub fn data_source(self, label: impl Into<String>, weight: f64) -> Self {
        self.entry(TableKind::DataSources, label, weight)
    }

    /// Adds a region to the geographic catalog.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.regions.push(region.into());
        self
    }

    /// Sets the fallback weights.
    #[must_use]
    pub fn fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Sets the confidence band factors.
    #[must_use]
    pub fn confidence(mut self, confidence: ConfidenceRange) -> Self {
        self.confidence = confidence;
        self
    }

    /// Validates the rows and builds the tables.
    ///
    /// # Errors
    ///
    /// Returns an error if any weight, fallback or confidence factor is
    /// invalid, a label repeats within a table, or the fallback data source
    /// has no row.
    pub fn build(self) -> Result<MarketTables, TablesError> {
        let mut tables = [
            WeightTable::new(),
            WeightTable::new(),
            WeightTable::new(),
            WeightTable::new(),
        ];

        for (kind, entry) in self.entries {
            if !kind.accepts(entry.weight) {
                return Err(TablesError::InvalidWeight {
                    kind,
                    label: entry.label,
                    weight: entry.weight,
                });
            }
            let slot = &mut tables[kind as usize];
            if slot.contains(&entry.label) {
                return Err(TablesError::DuplicateLabel {
                    kind,
                    label: entry.label,
                });
            }
            slot.insert(entry.label, entry.weight);
        }

        let fallbacks = self.fallbacks;
        for (kind, weight) in [
            (TableKind::Industries, fallbacks.industry),
            (TableKind::Roles, fallbacks.role),
            (TableKind::CompanySizes, fallbacks.company_size),
        ] {
            if !kind.accepts(weight) {
                return Err(TablesError::InvalidFallback { kind, weight });
            }
        }

        let confidence = self.confidence;
        if !confidence.brackets_expected() {
            return Err(TablesError::InvalidConfidence {
                conservative: confidence.conservative,
                aggressive: confidence.aggressive,
            });
        }

        let [industries, roles, company_sizes, data_sources] = tables;
        let data_source_fallback = data_sources
            .get(&fallbacks.data_source)
            .ok_or_else(|| TablesError::UnknownFallbackSource(fallbacks.data_source.clone()))?;

        Ok(MarketTables {
            industries,
            roles,
            company_sizes,
            data_sources,
            regions: self.regions,
            fallbacks,
            confidence,
            data_source_fallback,
        })
    }
}
