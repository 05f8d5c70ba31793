//! CSV output format.

use leadscope_types::Dimension;
use std::fmt::Display;
use std::io::Write;

use crate::{FormatError, Formatter, RoiReport, TamReport};

/// CSV formatter writing one `section,label,value` row per figure.
#[derive(Debug, Clone, Copy)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    fn header<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        if self.include_header {
            let d = self.delimiter;
            writeln!(writer, "section{d}label{d}value")?;
        }
        Ok(())
    }

    fn row<W: Write>(
        &self,
        writer: &mut W,
        section: &str,
        label: &str,
        value: impl Display,
    ) -> std::io::Result<()> {
        let d = self.delimiter;
        writeln!(
            writer,
            "{}{d}{}{d}{value}",
            self.field(section),
            self.field(label)
        )
    }

    /// Quotes a field that contains the delimiter, a quote or a line break.
    fn field(&self, value: &str) -> String {
        if value.contains([self.delimiter, '"', '\n', '\r']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_tam<W: Write + Send>(
        &self,
        report: &TamReport,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let result = &report.result;
        self.header(&mut writer)?;

        self.row(&mut writer, "summary", "base_market_size", result.base_market_size)?;
        self.row(
            &mut writer,
            "summary",
            "estimated_reachable",
            result.estimated_reachable,
        )?;
        self.row(
            &mut writer,
            "summary",
            "confidence_lower",
            result.confidence_interval.lower,
        )?;
        self.row(
            &mut writer,
            "summary",
            "confidence_upper",
            result.confidence_interval.upper,
        )?;

        for dimension in Dimension::all() {
            let section = match dimension {
                Dimension::Industry => "industry",
                Dimension::Role => "role",
                Dimension::CompanySize => "company_size",
            };
            for entry in result.breakdown.entries(*dimension) {
                self.row(&mut writer, section, &entry.label, entry.value)?;
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
        let result = &report.result;
        self.header(&mut writer)?;

        for (stage, value) in result.funnel_breakdown.stages() {
            self.row(&mut writer, "funnel", stage, value)?;
        }
        for (component, value) in result.cost_breakdown.components() {
            self.row(&mut writer, "costs", component, value)?;
        }

        let summary = [
            ("total_revenue", result.total_revenue),
            ("total_costs", result.total_costs),
            ("customer_ltv", result.customer_ltv),
            ("roi", result.roi),
            ("roi_multiple", result.roi_multiple),
            ("revenue_per_lead", result.revenue_per_lead),
            ("cost_per_acquisition", result.cost_per_acquisition),
        ];
        for (label, value) in summary {
            self.row(&mut writer, "summary", label, value)?;
        }
        self.row(
            &mut writer,
            "summary",
            "break_even_leads",
            result.break_even_leads,
        )?;

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
