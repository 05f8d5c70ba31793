//! Outreach campaign funnel and ROI estimation.

use leadscope_types::{BreakEven, CostBreakdown, FunnelBreakdown, RoiConfig, RoiResult};
use tracing::trace;

use crate::rounding::{round_to, to_count};

/// Unrounded counts at each funnel stage.
#[derive(Debug, Clone, Copy)]
struct Funnel {
    opens: f64,
    replies: f64,
    meetings_booked: f64,
    meetings_shown: f64,
    deals_closed: f64,
}

impl Funnel {
    /// Applies each rate to the stage before it, in cascade order.
    fn cascade(config: &RoiConfig) -> Self {
        let opens = config.leads * (config.open_rate / 100.0);
        let replies = opens * (config.reply_rate / 100.0);
        let meetings_booked = replies * (config.meeting_booked_rate / 100.0);
        let meetings_shown = meetings_booked * (config.meeting_show_rate / 100.0);
        let deals_closed = meetings_shown * (config.deal_close_rate / 100.0);

        Self {
            opens,
            replies,
            meetings_booked,
            meetings_shown,
            deals_closed,
        }
    }

    fn rounded(&self) -> FunnelBreakdown {
        FunnelBreakdown {
            opens: to_count(self.opens),
            replies: to_count(self.replies),
            meetings_booked: to_count(self.meetings_booked),
            meetings_shown: to_count(self.meetings_shown),
            deals_closed: to_count(self.deals_closed),
        }
    }
}

/// Estimates the funnel, revenue, costs and returns of an outreach campaign.
///
/// Every input is accepted. Rates are not clamped, so a rate above 100
/// amplifies its stage. Ratios with a zero denominator are reported as `0`,
/// and a funnel that closes no deals never breaks even.
#[must_use]
pub fn calculate_roi(config: &RoiConfig) -> RoiResult {
    let funnel = Funnel::cascade(config);
    trace!(?funnel, "funnel cascade");

    let ltv = config
        .customer_ltv
        .unwrap_or_else(|| config.average_deal_value * (config.contract_length / 12.0));
    let total_revenue = funnel.deals_closed * ltv;

    // outreach_frequency deliberately stays out of the totals
    let lead_costs = config.leads * config.cost_per_lead;
    let tool_costs = config.tool_costs * config.campaign_duration;
    let total_costs = lead_costs + tool_costs + config.time_costs + config.other_expenses;

    let roi = if total_costs > 0.0 {
        (total_revenue - total_costs) / total_costs * 100.0
    } else {
        0.0
    };
    let roi_multiple = if total_costs > 0.0 {
        total_revenue / total_costs
    } else {
        0.0
    };
    let revenue_per_lead = if config.leads > 0.0 {
        total_revenue / config.leads
    } else {
        0.0
    };
    let cost_per_acquisition = if funnel.deals_closed > 0.0 {
        total_costs / funnel.deals_closed
    } else {
        0.0
    };

    RoiResult {
        total_revenue: round_to(total_revenue, 0),
        total_costs: round_to(total_costs, 0),
        roi: round_to(roi, 2),
        roi_multiple: round_to(roi_multiple, 2),
        revenue_per_lead: round_to(revenue_per_lead, 2),
        cost_per_acquisition: round_to(cost_per_acquisition, 2),
        break_even_leads: break_even(config.leads, funnel.deals_closed, ltv, total_costs),
        customer_ltv: round_to(ltv, 0),
        funnel_breakdown: funnel.rounded(),
        cost_breakdown: CostBreakdown {
            lead_costs: round_to(lead_costs, 0),
            tool_costs: round_to(tool_costs, 0),
            time_costs: round_to(config.time_costs, 0),
            other_expenses: round_to(config.other_expenses, 0),
        },
    }
}

/// Leads needed for revenue to cover costs at the funnel's conversion rate.
fn break_even(leads: f64, deals_closed: f64, ltv: f64, total_costs: f64) -> BreakEven {
    // NaN when there are no leads, which also fails the comparison
    let conversion_rate = deals_closed / leads;
    let break_even_leads = total_costs / (ltv * conversion_rate);
    if conversion_rate > 0.0 && break_even_leads.is_finite() {
        BreakEven::Finite(round_to(break_even_leads, 0))
    } else {
        BreakEven::Unreachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use leadscope_types::OutreachFrequency;
    use proptest::prelude::*;

    #[test]
    fn test_reference_campaign() {
        let result = calculate_roi(&RoiConfig::default());
        let funnel = result.funnel_breakdown;

        assert_eq!(funnel.opens, 2500);
        assert_eq!(funnel.replies, 125);
        assert_eq!(funnel.meetings_booked, 38);
        assert_eq!(funnel.meetings_shown, 30);
        assert_eq!(funnel.deals_closed, 6);

        assert_relative_eq!(result.customer_ltv, 10_000.0);
        assert_relative_eq!(result.total_revenue, 60_000.0);
        assert_relative_eq!(result.total_costs, 12_100.0);
        assert_relative_eq!(result.roi, 395.87);
        assert_relative_eq!(result.roi_multiple, 4.96);
        assert_relative_eq!(result.revenue_per_lead, 6.0);
        assert_relative_eq!(result.cost_per_acquisition, 2016.67);
        assert_eq!(result.break_even_leads, BreakEven::Finite(2017.0));
    }

    #[test]
    fn test_cost_breakdown_sums_to_total() {
        let result = calculate_roi(&RoiConfig::default());
        let costs = result.cost_breakdown;

        assert_relative_eq!(costs.lead_costs, 10_000.0);
        assert_relative_eq!(costs.tool_costs, 600.0);
        assert_relative_eq!(costs.time_costs, 1_000.0);
        assert_relative_eq!(costs.other_expenses, 500.0);
        let sum: f64 = costs.components().iter().map(|(_, value)| value).sum();
        assert_relative_eq!(sum, result.total_costs);
    }

    #[test]
    fn test_ltv_override() {
        let config = RoiConfig {
            customer_ltv: Some(25_000.0),
            ..RoiConfig::default()
        };
        let result = calculate_roi(&config);

        assert_relative_eq!(result.customer_ltv, 25_000.0);
        assert_relative_eq!(result.total_revenue, 150_000.0);
    }

    #[test]
    fn test_ltv_scales_with_contract_length() {
        let config = RoiConfig {
            contract_length: 36.0,
            ..RoiConfig::default()
        };
        let result = calculate_roi(&config);

        assert_relative_eq!(result.customer_ltv, 30_000.0);
        assert_relative_eq!(result.total_revenue, 180_000.0);
    }

    #[test]
    fn test_zero_costs_report_zero_returns() {
        let config = RoiConfig {
            cost_per_lead: 0.0,
            tool_costs: 0.0,
            time_costs: 0.0,
            other_expenses: 0.0,
            ..RoiConfig::default()
        };
        let result = calculate_roi(&config);

        assert_relative_eq!(result.total_revenue, 60_000.0);
        assert_eq!(result.roi, 0.0);
        assert_eq!(result.roi_multiple, 0.0);
        assert_eq!(result.break_even_leads, BreakEven::Finite(0.0));
    }

    #[test]
    fn test_zero_leads() {
        let config = RoiConfig {
            leads: 0.0,
            ..RoiConfig::default()
        };
        let result = calculate_roi(&config);

        assert_eq!(result.funnel_breakdown, FunnelBreakdown::default());
        assert_eq!(result.revenue_per_lead, 0.0);
        assert_eq!(result.cost_per_acquisition, 0.0);
        assert!(result.break_even_leads.is_unreachable());
        assert_relative_eq!(result.total_costs, 2_100.0);
        assert_relative_eq!(result.roi, -100.0);
    }

    #[test]
    fn test_no_deals_never_breaks_even() {
        let config = RoiConfig {
            deal_close_rate: 0.0,
            ..RoiConfig::default()
        };
        let result = calculate_roi(&config);

        assert_eq!(result.funnel_breakdown.deals_closed, 0);
        assert!(result.break_even_leads.is_unreachable());
        assert_eq!(result.cost_per_acquisition, 0.0);
    }

    #[test]
    fn test_zero_ltv_never_breaks_even() {
        let config = RoiConfig {
            customer_ltv: Some(0.0),
            ..RoiConfig::default()
        };
        let result = calculate_roi(&config);

        assert_eq!(result.total_revenue, 0.0);
        assert!(result.break_even_leads.is_unreachable());
    }

    #[test]
    fn test_rate_above_hundred_amplifies() {
        let config = RoiConfig {
            leads: 100.0,
            reply_rate: 150.0,
            ..RoiConfig::default()
        };
        let result = calculate_roi(&config);

        assert_eq!(result.funnel_breakdown.opens, 25);
        assert_eq!(result.funnel_breakdown.replies, 38);
        assert!(!result.funnel_breakdown.is_monotonic());
    }

    #[test]
    fn test_frequency_does_not_change_totals() {
        let monthly = calculate_roi(&RoiConfig::default());
        for frequency in OutreachFrequency::all() {
            let config = RoiConfig {
                outreach_frequency: *frequency,
                ..RoiConfig::default()
            };
            assert_eq!(calculate_roi(&config), monthly);
        }
    }

    #[test]
    fn test_negative_inputs_are_defined() {
        let config = RoiConfig {
            leads: -100.0,
            time_costs: -50_000.0,
            ..RoiConfig::default()
        };
        let result = calculate_roi(&config);

        assert!(result.total_costs < 0.0);
        assert_eq!(result.roi, 0.0);
        assert_eq!(result.revenue_per_lead, 0.0);
        assert!(result.roi.is_finite());
    }

    fn rate() -> impl Strategy<Value = f64> {
        0.0f64..=100.0
    }

    fn campaign() -> impl Strategy<Value = RoiConfig> {
        (
            (0.0f64..1_000_000.0, rate(), rate(), rate(), rate(), rate()),
            (0.0f64..100_000.0, 0.0f64..60.0, 0.0f64..24.0),
            (0.0f64..10.0, 0.0f64..5_000.0, 0.0f64..10_000.0, 0.0f64..10_000.0),
        )
            .prop_map(|(funnel, deal, costs)| {
                let (leads, open, reply, booked, shown, close) = funnel;
                let (average_deal_value, contract_length, campaign_duration) = deal;
                let (cost_per_lead, tool_costs, time_costs, other_expenses) = costs;
                RoiConfig {
                    leads,
                    outreach_frequency: OutreachFrequency::Weekly,
                    campaign_duration,
                    open_rate: open,
                    reply_rate: reply,
                    meeting_booked_rate: booked,
                    meeting_show_rate: shown,
                    deal_close_rate: close,
                    average_deal_value,
                    contract_length,
                    customer_ltv: None,
                    cost_per_lead,
                    tool_costs,
                    time_costs,
                    other_expenses,
                }
            })
    }

    proptest! {
        #[test]
        fn funnel_never_grows(config in campaign()) {
            let funnel = calculate_roi(&config).funnel_breakdown;
            prop_assert!(funnel.is_monotonic());
            prop_assert!(funnel.deals_closed >= 0);
        }

        #[test]
        fn zero_cost_means_zero_roi(config in campaign()) {
            let config = RoiConfig {
                cost_per_lead: 0.0,
                tool_costs: 0.0,
                time_costs: 0.0,
                other_expenses: 0.0,
                ..config
            };
            let result = calculate_roi(&config);
            prop_assert_eq!(result.roi, 0.0);
            prop_assert_eq!(result.roi_multiple, 0.0);
        }

        #[test]
        fn no_deals_is_unreachable(config in campaign()) {
            let config = RoiConfig { deal_close_rate: 0.0, ..config };
            prop_assert!(calculate_roi(&config).break_even_leads.is_unreachable());
        }

        #[test]
        fn estimate_is_deterministic(config in campaign()) {
            prop_assert_eq!(calculate_roi(&config), calculate_roi(&config));
        }
    }
}
