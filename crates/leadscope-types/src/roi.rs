//! Outreach campaign ROI configuration and results.

use serde::{Deserialize, Serialize};

use crate::OutreachFrequency;

/// Inputs for an outreach campaign ROI estimate.
///
/// Rates are percentages. Nothing here is range-checked; see
/// [`RoiConfig::warnings`] for inputs a caller may want to flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiConfig {
    /// Number of leads contacted.
    pub leads: f64,
    /// Outreach cadence (informational).
    pub outreach_frequency: OutreachFrequency,
    /// Campaign length in months.
    pub campaign_duration: f64,
    /// Percentage of leads that open.
    pub open_rate: f64,
    /// Percentage of opens that reply.
    pub reply_rate: f64,
    /// Percentage of replies that book a meeting.
    pub meeting_booked_rate: f64,
    /// Percentage of booked meetings that take place.
    pub meeting_show_rate: f64,
    /// Percentage of held meetings that close.
    pub deal_close_rate: f64,
    /// Annual contract value of a closed deal.
    pub average_deal_value: f64,
    /// Contract length in months.
    pub contract_length: f64,
    /// Lifetime value override.
    pub customer_ltv: Option<f64>,
    /// Acquisition cost per lead.
    pub cost_per_lead: f64,
    /// Tooling cost per month.
    pub tool_costs: f64,
    /// Total cost of time spent.
    pub time_costs: f64,
    /// Any other campaign expenses.
    pub other_expenses: f64,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            leads: 10_000.0,
            outreach_frequency: OutreachFrequency::Monthly,
            campaign_duration: 3.0,
            open_rate: 25.0,
            reply_rate: 5.0,
            meeting_booked_rate: 30.0,
            meeting_show_rate: 80.0,
            deal_close_rate: 20.0,
            average_deal_value: 10_000.0,
            contract_length: 12.0,
            customer_ltv: None,
            cost_per_lead: 1.0,
            tool_costs: 200.0,
            time_costs: 1_000.0,
            other_expenses: 500.0,
        }
    }
}

impl RoiConfig {
    /// Returns the funnel rates in cascade order with their names.
    #[must_use]
    pub const fn rates(&self) -> [(&'static str, f64); 5] {
        [
            ("open_rate", self.open_rate),
            ("reply_rate", self.reply_rate),
            ("meeting_booked_rate", self.meeting_booked_rate),
            ("meeting_show_rate", self.meeting_show_rate),
            ("deal_close_rate", self.deal_close_rate),
        ]
    }

    /// Lists inputs that produce degenerate but well-defined results.
    ///
    /// The estimator accepts all of these; they are surfaced so a caller
    /// can tell the user why a funnel amplifies or a total turns negative.
    #[must_use]
    pub fn warnings(&self) -> Vec<RoiWarning> {
        let mut warnings: Vec<RoiWarning> = self
            .rates()
            .into_iter()
            .filter(|(_, value)| !(0.0..=100.0).contains(value))
            .map(|(field, value)| RoiWarning::RateOutOfRange { field, value })
            .collect();

        let amounts = [
            ("leads", self.leads),
            ("campaign_duration", self.campaign_duration),
            ("average_deal_value", self.average_deal_value),
            ("contract_length", self.contract_length),
            ("cost_per_lead", self.cost_per_lead),
            ("tool_costs", self.tool_costs),
            ("time_costs", self.time_costs),
            ("other_expenses", self.other_expenses),
        ];
        warnings.extend(
            amounts
                .into_iter()
                .chain(self.customer_ltv.map(|ltv| ("customer_ltv", ltv)))
                .filter(|(_, value)| *value < 0.0)
                .map(|(field, value)| RoiWarning::Negative { field, value }),
        );

        warnings
    }
}

/// An input the estimator tolerates but a user probably did not intend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoiWarning {
    /// A percentage outside [0, 100].
    RateOutOfRange {
        /// Configuration field name.
        field: &'static str,
        /// Supplied percentage.
        value: f64,
    },
    /// A count, duration or amount below zero.
    Negative {
        /// Configuration field name.
        field: &'static str,
        /// Supplied value.
        value: f64,
    },
}

impl std::fmt::Display for RoiWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateOutOfRange { field, value } => {
                write!(f, "{field} is {value}%, outside 0-100%")
            }
            Self::Negative { field, value } => write!(f, "{field} is negative ({value})"),
        }
    }
}

/// Count at each funnel stage, rounded to whole prospects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelBreakdown {
    /// Leads that opened.
    pub opens: i64,
    /// Opens that replied.
    pub replies: i64,
    /// Replies that booked a meeting.
    pub meetings_booked: i64,
    /// Booked meetings that took place.
    pub meetings_shown: i64,
    /// Meetings that closed.
    pub deals_closed: i64,
}

impl FunnelBreakdown {
    /// Returns the stages in cascade order with display names.
    #[must_use]
    pub const fn stages(&self) -> [(&'static str, i64); 5] {
        [
            ("Opens", self.opens),
            ("Replies", self.replies),
            ("Meetings Booked", self.meetings_booked),
            ("Meetings Shown", self.meetings_shown),
            ("Deals Closed", self.deals_closed),
        ]
    }

    /// Returns true if no stage exceeds the stage before it.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.stages().windows(2).all(|pair| pair[0].1 >= pair[1].1)
    }
}

/// The four components of total campaign cost, rounded to whole currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Leads times cost per lead.
    pub lead_costs: f64,
    /// Monthly tool cost times campaign duration.
    pub tool_costs: f64,
    /// Cost of time spent.
    pub time_costs: f64,
    /// Other expenses.
    pub other_expenses: f64,
}

impl CostBreakdown {
    /// Returns the components with display names.
    #[must_use]
    pub const fn components(&self) -> [(&'static str, f64); 4] {
        [
            ("Lead Costs", self.lead_costs),
            ("Tool Costs", self.tool_costs),
            ("Time Costs", self.time_costs),
            ("Other Expenses", self.other_expenses),
        ]
    }
}

/// Number of leads needed to recover campaign costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "leads", rename_all = "snake_case")]
pub enum BreakEven {
    /// Costs are recovered after this many leads.
    Finite(f64),
    /// The funnel closes no deals, so costs are never recovered.
    Unreachable,
}

impl BreakEven {
    /// Returns the lead count, or `None` when unreachable.
    #[must_use]
    pub const fn leads(&self) -> Option<f64> {
        match self {
            Self::Finite(leads) => Some(*leads),
            Self::Unreachable => None,
        }
    }

    /// Returns true for the unreachable sentinel.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable)
    }
}

impl std::fmt::Display for BreakEven {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(leads) => write!(f, "{leads}"),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Result of an ROI estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Revenue from closed deals.
    pub total_revenue: f64,
    /// Sum of all campaign costs.
    pub total_costs: f64,
    /// Return on investment, in percent.
    pub roi: f64,
    /// Revenue divided by costs.
    pub roi_multiple: f64,
    /// Revenue per lead contacted.
    pub revenue_per_lead: f64,
    /// Cost per closed deal.
    pub cost_per_acquisition: f64,
    /// Leads needed to break even.
    pub break_even_leads: BreakEven,
    /// Lifetime value used for revenue.
    pub customer_ltv: f64,
    /// Count at each funnel stage.
    pub funnel_breakdown: FunnelBreakdown,
    /// Components of total cost.
    pub cost_breakdown: CostBreakdown,
}
