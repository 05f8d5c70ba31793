//! Display utilities and output formatting for the leadscope CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use leadscope_lib::group_thousands;
use leadscope_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Weight table selector for the `tables` command.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Kind {
    Industries,
    Roles,
    Sizes,
    Sources,
}

impl From<Kind> for TableKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Industries => Self::Industries,
            Kind::Roles => Self::Roles,
            Kind::Sizes => Self::CompanySizes,
            Kind::Sources => Self::DataSources,
        }
    }
}

/// Opens the report destination: a file when a path is given, stdout otherwise.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

/// Write a TAM report in the specified format.
pub(crate) fn write_tam(
    report: &TamReport,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let writer = open_output(output)?;

    match format {
        OutputFormat::Text => TextFormatter::new().write_tam(report, writer)?,
        OutputFormat::Json => JsonFormatter::pretty().write_tam(report, writer)?,
        OutputFormat::Csv => CsvFormatter::new().write_tam(report, writer)?,
    }

    Ok(())
}

/// Write an ROI report in the specified format.
pub(crate) fn write_roi(
    report: &RoiReport,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let writer = open_output(output)?;

    match format {
        OutputFormat::Text => TextFormatter::new().write_roi(report, writer)?,
        OutputFormat::Json => JsonFormatter::pretty().write_roi(report, writer)?,
        OutputFormat::Csv => CsvFormatter::new().write_roi(report, writer)?,
    }

    Ok(())
}

/// Formats a table weight: fractions as percentages, populations with separators.
pub(crate) fn format_weight(kind: TableKind, weight: f64) -> String {
    if kind.is_fraction() {
        return format!("{:.0}%", weight * 100.0);
    }

    group_thousands(&format!("{weight:.0}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(TableKind::Industries, 18_000_000.0), "18,000,000");
        assert_eq!(format_weight(TableKind::Roles, 420.0), "420");
        assert_eq!(format_weight(TableKind::CompanySizes, 0.26), "26%");
        assert_eq!(format_weight(TableKind::DataSources, 0.5), "50%");
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roi.csv");
        let config = RoiConfig::default();
        let result = calculate_roi(&config);

        write_roi(&RoiReport::new(config, result), OutputFormat::Csv, Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("section,label,value\n"));
        assert!(written.contains("summary,total_costs,12100\n"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("tam.json");
        let config = TamConfig::default().with_industry("Retail").with_role("CFO");
        let result = calculate_tam(&config);

        let err = write_tam(&TamReport::new(config, result), OutputFormat::Json, Some(&path))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
    }
}
