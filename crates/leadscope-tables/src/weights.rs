//! Ordered label-to-weight tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single row of a weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Category label (e.g., "Technology", "CEO", "51-200").
    pub label: String,
    /// Weight for the label: a population or a fraction depending on the table.
    pub weight: f64,
}

impl WeightEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

/// A `label -> weight` table that remembers catalog order.
///
/// Lookups are exact-match. [`WeightTable::canonical`] offers a forgiving
/// match for user input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<WeightEntry>", into = "Vec<WeightEntry>")]
pub struct WeightTable {
    entries: Vec<WeightEntry>,
    index: HashMap<String, usize>,
}

impl WeightTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row, replacing the weight if the label is already present.
    ///
    /// Returns true if the label was new.
    pub fn insert(&mut self, label: impl Into<String>, weight: f64) -> bool {
        let label = label.into();
        if let Some(&position) = self.index.get(&label) {
            self.entries[position].weight = weight;
            return false;
        }
        self.index.insert(label.clone(), self.entries.len());
        self.entries.push(WeightEntry::new(label, weight));
        true
    }

    /// Returns the weight for an exact label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.index
            .get(label)
            .map(|&position| self.entries[position].weight)
    }

    /// Returns true if the table has a row for the label.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Finds the catalog spelling of a label typed by a user.
    ///
    /// Matching ignores ASCII case and treats spaces, hyphens and
    /// underscores alike, so "real estate" resolves to "Real_Estate".
    #[must_use]
    pub fn canonical(&self, input: &str) -> Option<&str> {
        if self.contains(input) {
            return self.index.get_key_value(input).map(|(key, _)| key.as_str());
        }
        let wanted = normalize(input);
        self.entries
            .iter()
            .find(|entry| normalize(&entry.label) == wanted)
            .map(|entry| entry.label.as_str())
    }

    /// Returns labels containing `pattern`, ignoring case.
    pub fn search(&self, pattern: &str) -> Vec<&WeightEntry> {
        let pattern = pattern.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.label.to_lowercase().contains(&pattern))
            .collect()
    }

    /// Returns the rows in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &WeightEntry> {
        self.entries.iter()
    }

    /// Returns the labels in catalog order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

impl From<Vec<WeightEntry>> for WeightTable {
    fn from(entries: Vec<WeightEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<WeightTable> for Vec<WeightEntry> {
    fn from(table: WeightTable) -> Self {
        table.entries
    }
}

impl FromIterator<WeightEntry> for WeightTable {
    fn from_iter<I: IntoIterator<Item = WeightEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry.label, entry.weight);
        }
        table
    }
}

impl<'a> IntoIterator for &'a WeightTable {
    type Item = &'a WeightEntry;
    type IntoIter = std::slice::Iter<'a, WeightEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
