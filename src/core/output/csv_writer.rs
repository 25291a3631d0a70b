//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::FlatRecord;
use crate::config::ExportConfig;
use crate::core::stats::ScalarStats;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes the record table to a CSV file.
///
/// # Format
/// - Delimiter: `config.delimiter` (default `,`)
/// - Columns: see [`output`](crate::core::output)
/// - Encoding: UTF-8, multi-line bodies quoted
pub fn write_csv(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, records, config)
}

/// Converts the record table to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(records: &[MessageRecord], config: &ExportConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(
    sink: W,
    records: &[MessageRecord],
    config: &ExportConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(sink);

    writer.write_record(FlatRecord::header(config))?;
    for record in records {
        writer.write_record(FlatRecord::new(record, config).fields())?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the headline counts as a two-column `Metric,Value` CSV file.
pub fn write_summary_csv(stats: &ScalarStats, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_summary(file, stats)
}

/// Converts the headline counts to a `Metric,Value` CSV string.
///
/// ```
/// use chatlens::core::output::summary_to_csv;
/// use chatlens::core::ScalarStats;
///
/// let stats = ScalarStats { total_messages: 2, total_words: 3, media_count: 0, link_count: 1 };
/// let csv = summary_to_csv(&stats).unwrap();
///
/// assert!(csv.starts_with("Metric,Value\nTotal Messages,2\n"));
/// ```
pub fn summary_to_csv(stats: &ScalarStats) -> Result<String> {
    let mut buffer = Vec::new();
    write_summary(&mut buffer, stats)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_summary<W: Write>(sink: W, stats: &ScalarStats) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(["Metric", "Value"])?;
    for (metric, value) in stats.rows() {
        let value = value.to_string();
        writer.write_record([metric, value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
