//! Outreach cadence definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How often prospects are contacted during a campaign.
///
/// The cadence is descriptive: it is carried through configurations and
/// reports but does not enter any computed cost or revenue total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutreachFrequency {
    /// One touch per day.
    Daily,
    /// One touch per week.
    Weekly,
    /// One touch per month.
    #[default]
    Monthly,
}

impl OutreachFrequency {
    /// Returns the number of touches in a month at this cadence.
    #[must_use]
    pub const fn touches_per_month(&self) -> u32 {
        match self {
            Self::Daily => 30,
            Self::Weekly => 4,
            Self::Monthly => 1,
        }
    }

    /// Returns the frequency as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Returns all available frequencies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Daily, Self::Weekly, Self::Monthly]
    }
}

impl std::fmt::Display for OutreachFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutreachFrequency {
    type Err = FrequencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(Self::Daily),
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            _ => Err(FrequencyParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid outreach frequency string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyParseError(String);

impl std::fmt::Display for FrequencyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid outreach frequency '{}', expected one of: daily, weekly, monthly",
            self.0
        )
    }
}

impl std::error::Error for FrequencyParseError {}
