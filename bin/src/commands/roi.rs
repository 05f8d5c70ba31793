//! ROI command implementation.

use super::finite_number;
use crate::{config, display};
use anyhow::Result;
use clap::Args;
use leadscope_lib::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// Per-field campaign overrides. Unset fields keep the base configuration.
#[derive(Args, Default)]
pub(crate) struct CampaignArgs {
    /// Number of leads contacted
    #[arg(short, long, value_parser = finite_number)]
    leads: Option<f64>,

    /// Outreach cadence (daily, weekly, monthly)
    #[arg(long)]
    frequency: Option<OutreachFrequency>,

    /// Campaign length in months
    #[arg(long, value_parser = finite_number)]
    duration: Option<f64>,

    /// Percentage of leads that open
    #[arg(long, value_parser = finite_number)]
    open_rate: Option<f64>,

    /// Percentage of opens that reply
    #[arg(long, value_parser = finite_number)]
    reply_rate: Option<f64>,

    /// Percentage of replies that book a meeting
    #[arg(long, value_parser = finite_number)]
    meeting_rate: Option<f64>,

    /// Percentage of booked meetings that take place
    #[arg(long, value_parser = finite_number)]
    show_rate: Option<f64>,

    /// Percentage of held meetings that close
    #[arg(long, value_parser = finite_number)]
    close_rate: Option<f64>,

    /// Annual contract value of a closed deal
    #[arg(long, value_parser = finite_number)]
    deal_value: Option<f64>,

    /// Contract length in months
    #[arg(long, value_parser = finite_number)]
    contract_length: Option<f64>,

    /// Customer lifetime value, replacing deal value x contract length
    #[arg(long, value_parser = finite_number)]
    ltv: Option<f64>,

    /// Acquisition cost per lead
    #[arg(long, value_parser = finite_number)]
    cost_per_lead: Option<f64>,

    /// Tooling cost per month
    #[arg(long, value_parser = finite_number)]
    tool_costs: Option<f64>,

    /// Total cost of time spent
    #[arg(long, value_parser = finite_number)]
    time_costs: Option<f64>,

    /// Any other campaign expenses
    #[arg(long, value_parser = finite_number)]
    other_expenses: Option<f64>,
}

impl CampaignArgs {
    /// Applies the set overrides on top of `base`.
    fn apply(&self, base: RoiConfig) -> RoiConfig {
        RoiConfig {
            leads: self.leads.unwrap_or(base.leads),
            outreach_frequency: self.frequency.unwrap_or(base.outreach_frequency),
            campaign_duration: self.duration.unwrap_or(base.campaign_duration),
            open_rate: self.open_rate.unwrap_or(base.open_rate),
            reply_rate: self.reply_rate.unwrap_or(base.reply_rate),
            meeting_booked_rate: self.meeting_rate.unwrap_or(base.meeting_booked_rate),
            meeting_show_rate: self.show_rate.unwrap_or(base.meeting_show_rate),
            deal_close_rate: self.close_rate.unwrap_or(base.deal_close_rate),
            average_deal_value: self.deal_value.unwrap_or(base.average_deal_value),
            contract_length: self.contract_length.unwrap_or(base.contract_length),
            customer_ltv: self.ltv.or(base.customer_ltv),
            cost_per_lead: self.cost_per_lead.unwrap_or(base.cost_per_lead),
            tool_costs: self.tool_costs.unwrap_or(base.tool_costs),
            time_costs: self.time_costs.unwrap_or(base.time_costs),
            other_expenses: self.other_expenses.unwrap_or(base.other_expenses),
        }
    }
}

/// Estimate and write the ROI of an outreach campaign.
pub(crate) fn roi(
    base: Option<&Path>,
    campaign: &CampaignArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let base = base.map(config::load_campaign).transpose()?.unwrap_or_default();
    let config = campaign.apply(base);

    for warning in config.warnings() {
        warn!("{warning}");
    }

    let result = calculate_roi(&config);
    info!(
        roi = result.roi,
        deals = result.funnel_breakdown.deals_closed,
        break_even = %result.break_even_leads,
        "estimated roi"
    );

    display::write_roi(&RoiReport::new(config, result), format, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct RoiFlags {
        #[command(flatten)]
        campaign: CampaignArgs,
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        let base = RoiConfig {
            leads: 750.0,
            customer_ltv: Some(4_000.0),
            ..RoiConfig::default()
        };
        assert_eq!(CampaignArgs::default().apply(base.clone()), base);
    }

    #[test]
    fn test_overrides_replace_fields() {
        let args = CampaignArgs {
            leads: Some(2_000.0),
            frequency: Some(OutreachFrequency::Weekly),
            close_rate: Some(25.0),
            ltv: Some(12_000.0),
            ..CampaignArgs::default()
        };
        let config = args.apply(RoiConfig::default());

        assert_eq!(config.leads, 2_000.0);
        assert_eq!(config.outreach_frequency, OutreachFrequency::Weekly);
        assert_eq!(config.deal_close_rate, 25.0);
        assert_eq!(config.customer_ltv, Some(12_000.0));
        assert_eq!(config.open_rate, RoiConfig::default().open_rate);
    }

    #[test]
    fn test_numeric_flags_parse() {
        let flags = RoiFlags::try_parse_from(["roi", "-l", "2500", "--ltv", "9000"]).unwrap();
        let config = flags.campaign.apply(RoiConfig::default());

        assert_eq!(config.leads, 2_500.0);
        assert_eq!(config.customer_ltv, Some(9_000.0));
    }

    #[test]
    fn test_non_finite_flags_are_rejected() {
        for args in [
            ["roi", "--leads", "inf"],
            ["roi", "--leads", "NaN"],
            ["roi", "--deal-value", "-inf"],
            ["roi", "--ltv", "nan"],
            ["roi", "--tool-costs", "1e999"],
        ] {
            assert!(RoiFlags::try_parse_from(args).is_err(), "{args:?} should be rejected");
        }
    }

    #[test]
    fn test_roi_writes_json_report() {
        let dir = TempDir::new().unwrap();
        let campaign_file = dir.path().join("campaign.json");
        std::fs::write(&campaign_file, r#"{"deal_close_rate": 0}"#).unwrap();
        let output = dir.path().join("roi.json");

        roi(
            Some(&campaign_file),
            &CampaignArgs::default(),
            OutputFormat::Json,
            Some(&output),
        )
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let report: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(report["result"]["break_even_leads"]["kind"], "unreachable");
        assert_eq!(report["config"]["leads"], 10_000.0);
    }
}
