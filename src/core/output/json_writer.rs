//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::FlatRecord;
use crate::config::ExportConfig;
use crate::core::report::Report;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes the record table to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-01-01 10:00:00", "sender": "Alice", "body": "Hello", ...},
///   {"timestamp": "2023-01-01 10:05:00", "sender": "Bob", "body": "Hi", ...}
/// ]
/// ```
pub fn write_json(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the record table to a pretty-printed JSON array.
pub fn to_json(records: &[MessageRecord], config: &ExportConfig) -> Result<String> {
    let rows: Vec<FlatRecord<'_>> = records
        .iter()
        .map(|r| FlatRecord::new(r, config))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Writes a full [`Report`] to a JSON file.
pub fn write_report_json(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a [`Report`] to a pretty-printed JSON object.
pub fn report_to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
