//! Output formatting functionality
//!
//! This module renders reports as text tables, JSON or CSV.

use crate::error::{CountextError, Result};
use crate::models::report::Report;
use serde::Serialize;

/// Format one report as the aligned text table
///
/// ```text
/// file statistics for .:
///   .md             1
///   .txt            2
/// ```
pub fn format_report_text(report: &Report) -> String {
    let mut output = format!("file statistics for {}:\n", report.label);
    let width = report.key_width + 2;

    for entry in &report.entries {
        output.push_str(&format!("  {:<width$} {}\n", entry.key, entry.count, width = width));
    }

    output
}

/// Format all reports as a pretty-printed JSON array
pub fn format_reports_json(reports: &[Report], pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(reports)?
    } else {
        serde_json::to_string(reports)?
    };
    json.push('\n');
    Ok(json)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    label: &'a str,
    key: &'a str,
    count: usize,
}

/// Format all reports as one CSV document with a `label,key,count` header
pub fn format_reports_csv(reports: &[Report]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // serialize() only emits the header once a row exists
    if reports.iter().all(Report::is_empty) {
        writer.write_record(["label", "key", "count"])?;
    }

    for report in reports {
        for entry in &report.entries {
            writer.serialize(CsvRow {
                label: &report.label,
                key: &entry.key,
                count: entry.count,
            })?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CountextError::CsvSerialize {
            message: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| CountextError::CsvSerialize {
        message: e.to_string(),
    })
}
