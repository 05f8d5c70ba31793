//! JSON output format.

use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter, RoiReport, TamReport};

/// JSON formatter writing the whole report envelope as one document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Creates a new pretty-printing JSON formatter.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_document<T, W>(&self, value: &T, mut writer: W) -> Result<(), FormatError>
    where
        T: Serialize,
        W: Write,
    {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_tam<W: Write + Send>(&self, report: &TamReport, writer: W) -> Result<(), FormatError> {
        self.write_document(report, writer)
    }

    fn write_roi<W: Write + Send>(&self, report: &RoiReport, writer: W) -> Result<(), FormatError> {
        self.write_document(report, writer)
    }

    fn extension(&self) -> &str {
        "json"
    }
}
