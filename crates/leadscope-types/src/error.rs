//! Error types for leadscope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A categorical dimension of a TAM selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Industry labels.
    Industry,
    /// Role labels.
    Role,
    /// Company-size bucket labels.
    CompanySize,
}

impl Dimension {
    /// Returns the dimension as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Industry => "industry",
            Self::Role => "role",
            Self::CompanySize => "company size",
        }
    }

    /// Returns all dimensions in selection order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Industry, Self::Role, Self::CompanySize]
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for TAM selections the calculator should not be run on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No label was selected for a required dimension.
    #[error("Select at least one {0}")]
    Empty(Dimension),
}
