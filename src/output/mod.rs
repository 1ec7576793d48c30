//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::formatters::{format_report_text, format_reports_csv, format_reports_json};
pub use self::progress::{ProgressReporter, TAG};
pub use self::writers::{FileWriter, OutputWriter, StdoutWriter, create_writer};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::Report;

/// Trait for different output formatters
pub trait Formatter {
    /// Format reports into a string
    fn format(&self, reports: &[Report]) -> Result<String>;

    /// Whether each report can be written as soon as it is ready
    ///
    /// Formatters producing a single document (JSON, CSV) return false and
    /// are called once with every report at the end of the run.
    fn streams(&self) -> bool {
        false
    }
}

/// Text formatter for the aligned frequency table
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, reports: &[Report]) -> Result<String> {
        Ok(reports.iter().map(format_report_text).collect())
    }

    fn streams(&self) -> bool {
        true
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, reports: &[Report]) -> Result<String> {
        format_reports_json(reports, self.pretty)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, reports: &[Report]) -> Result<String> {
        format_reports_csv(reports)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
