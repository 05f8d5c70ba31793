//! Human-readable text output.

use leadscope_types::{BreakEven, Dimension, TamConfig};
use std::io::Write;

use crate::{FormatError, Formatter, RoiReport, TamReport};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Text formatter producing an aligned two-column summary.
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    /// Width of the label column.
    label_width: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    /// Creates a new text formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self { label_width: 22 }
    }

    /// Sets the width of the label column.
    #[must_use]
    pub const fn with_label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    fn row<W: Write>(&self, writer: &mut W, label: &str, value: &str) -> std::io::Result<()> {
        writeln!(writer, "  {label:<width$}{value}", width = self.label_width)
    }

    fn write_selection<W: Write>(&self, writer: &mut W, config: &TamConfig) -> std::io::Result<()> {
        writeln!(writer, "Selection")?;
        for (heading, dimension) in [
            ("Industries", Dimension::Industry),
            ("Roles", Dimension::Role),
            ("Company sizes", Dimension::CompanySize),
        ] {
            self.row(writer, heading, &list(config.labels(dimension)))?;
        }
        self.row(writer, "Region", config.primary_region().unwrap_or("-"))?;
        self.row(writer, "Data source", &config.data_source)?;
        if let Some(multiplier) = config.custom_multiplier {
            self.row(writer, "Custom multiplier", &multiplier.to_string())?;
        }
        Ok(())
    }
}

impl Formatter for TextFormatter {
    fn write_tam<W: Write + Send>(
        &self,
        report: &TamReport,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let result = &report.result;
        writeln!(
            writer,
            "TAM Estimate (generated {})",
            report.generated_at.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(writer)?;

        self.write_selection(&mut writer, &report.config)?;
        writeln!(writer)?;

        writeln!(writer, "Market")?;
        self.row(&mut writer, "Base market size", &count(result.base_market_size))?;
        self.row(
            &mut writer,
            "Estimated reachable",
            &count(result.estimated_reachable),
        )?;
        self.row(
            &mut writer,
            "Confidence interval",
            &format!(
                "{} - {}",
                count(result.confidence_interval.lower),
                count(result.confidence_interval.upper)
            ),
        )?;

        for dimension in Dimension::all() {
            let entries = result.breakdown.entries(*dimension);
            if entries.is_empty() {
                continue;
            }
            writeln!(writer)?;
            writeln!(writer, "By {dimension}")?;
            for entry in entries {
                self.row(&mut writer, &entry.label, &count(entry.value))?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn write_roi<W: Write + Send>(
        &self,
        report: &RoiReport,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let config = &report.config;
        let result = &report.result;
        writeln!(
            writer,
            "ROI Estimate (generated {})",
            report.generated_at.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(writer)?;

        let touches = config.outreach_frequency.touches_per_month();
        writeln!(writer, "Campaign")?;
        self.row(&mut writer, "Leads", &number(config.leads, 0))?;
        self.row(
            &mut writer,
            "Outreach frequency",
            &format!(
                "{} ({touches} {} per month)",
                config.outreach_frequency,
                if touches == 1 { "touch" } else { "touches" }
            ),
        )?;
        self.row(
            &mut writer,
            "Campaign duration",
            &format!("{} months", config.campaign_duration),
        )?;
        writeln!(writer)?;

        writeln!(writer, "Funnel")?;
        for (stage, value) in result.funnel_breakdown.stages() {
            self.row(&mut writer, stage, &number(value as f64, 0))?;
        }
        writeln!(writer)?;

        writeln!(writer, "Costs")?;
        for (component, value) in result.cost_breakdown.components() {
            self.row(&mut writer, component, &currency(value, 0))?;
        }
        self.row(&mut writer, "Total", &currency(result.total_costs, 0))?;
        writeln!(writer)?;

        writeln!(writer, "Returns")?;
        self.row(&mut writer, "Total revenue", &currency(result.total_revenue, 0))?;
        self.row(&mut writer, "Customer LTV", &currency(result.customer_ltv, 0))?;
        self.row(&mut writer, "ROI", &format!("{}%", number(result.roi, 2)))?;
        self.row(
            &mut writer,
            "ROI multiple",
            &format!("{}x", number(result.roi_multiple, 2)),
        )?;
        self.row(
            &mut writer,
            "Revenue per lead",
            &currency(result.revenue_per_lead, 2),
        )?;
        self.row(
            &mut writer,
            "Cost per acquisition",
            &currency(result.cost_per_acquisition, 2),
        )?;
        let break_even = match result.break_even_leads {
            BreakEven::Finite(leads) => number(leads, 0),
            BreakEven::Unreachable => "\u{221e}".to_string(),
        };
        self.row(&mut writer, "Break-even leads", &break_even)?;

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

fn list(labels: &[String]) -> String {
    if labels.is_empty() {
        "-".to_string()
    } else {
        labels.join(", ")
    }
}

/// Inserts a comma between every group of three digits.
///
/// `digits` must be an unsigned run of ASCII digits; callers split off any
/// sign or fraction first.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Formats with thousands separators and a fixed number of decimals.
fn number(value: f64, decimals: usize) -> String {
    let (sign, magnitude) = split_sign(value, decimals);
    format!("{sign}{magnitude}")
}

fn currency(value: f64, decimals: usize) -> String {
    let (sign, magnitude) = split_sign(value, decimals);
    format!("{sign}${magnitude}")
}

fn split_sign(value: f64, decimals: usize) -> (&'static str, String) {
    let formatted = format!("{:.*}", decimals, value.abs());
    let magnitude = match formatted.split_once('.') {
        Some((whole, fraction)) => format!("{}.{fraction}", group_thousands(whole)),
        None => group_thousands(&formatted),
    };
    let negative = value < 0.0 && magnitude.chars().any(|c| c.is_ascii_digit() && c != '0');
    (if negative { "-" } else { "" }, magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use leadscope_estimate::{calculate_roi, calculate_tam};
    use leadscope_types::RoiConfig;
    use std::io::Cursor;

    fn tam_report() -> TamReport {
        let config = TamConfig::default()
            .with_industry("Technology")
            .with_role("CEO")
            .with_company_size("51-200");
        let result = calculate_tam(&config);
        TamReport::new(config, result)
            .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap())
    }

    fn roi_report(config: RoiConfig) -> RoiReport {
        let result = calculate_roi(&config);
        RoiReport::new(config, result)
            .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap())
    }

    fn render_roi(config: RoiConfig) -> String {
        let mut output = Cursor::new(Vec::new());
        TextFormatter::new()
            .write_roi(&roi_report(config), &mut output)
            .unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(count(0), "0");
        assert_eq!(count(999), "999");
        assert_eq!(count(1_000), "1,000");
        assert_eq!(count(11_700_000), "11,700,000");
        assert_eq!(currency(2016.666, 2), "$2,016.67");
        assert_eq!(currency(-12_100.0, 0), "-$12,100");
        assert_eq!(number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_text_tam() {
        let mut output = Cursor::new(Vec::new());
        TextFormatter::new()
            .write_tam(&tam_report(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("TAM Estimate (generated 2024-01-15 12:30:45 UTC)"));
        assert!(result.contains("Base market size      109,200"));
        assert!(result.contains("Confidence interval   46,137 - 95,823"));
        assert!(result.contains("By company size"));
        assert!(result.contains("Technology            11,700,000"));
    }

    #[test]
    fn test_text_roi() {
        let result = render_roi(RoiConfig::default());

        assert!(result.contains("monthly (1 touch per month)"));
        assert!(result.contains("Meetings Booked       38"));
        assert!(result.contains("Total                 $12,100"));
        assert!(result.contains("ROI                   395.87%"));
        assert!(result.contains("ROI multiple          4.96x"));
        assert!(result.contains("Cost per acquisition  $2,016.67"));
        assert!(result.contains("Break-even leads      2,017"));
    }

    #[test]
    fn test_text_roi_unreachable() {
        let result = render_roi(RoiConfig {
            deal_close_rate: 0.0,
            ..RoiConfig::default()
        });
        assert!(result.contains("Break-even leads      \u{221e}"));
    }

    #[test]
    fn test_label_width() {
        let mut output = Cursor::new(Vec::new());
        TextFormatter::new()
            .with_label_width(30)
            .write_roi(&roi_report(RoiConfig::default()), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains(&format!("  {:<30}2,500", "Opens")));
    }
}
