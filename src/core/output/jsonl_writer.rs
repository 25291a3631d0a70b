//! JSON Lines (JSONL) output writer.
//!
//! One record per line, which suits line-oriented tools (`jq`, `grep`,
//! dataframe loaders) and keeps very large exports appendable.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::FlatRecord;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes the record table to a JSONL file.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2023-01-01 10:00:00","sender":"Alice","body":"Hello",...}
/// {"timestamp":"2023-01-01 10:05:00","sender":"Bob","body":"Hi",...}
/// ```
pub fn write_jsonl(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, records, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts the record table to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord], config: &ExportConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(&mut buffer, records, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(
    writer: &mut W,
    records: &[MessageRecord],
    config: &ExportConfig,
) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(&FlatRecord::new(record, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ExportParser;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    fn records() -> Vec<MessageRecord> {
        ExportParser::new()
            .parse_str(
                "01/01/2023, 10:00 - Alice: Hello\nWorld\n\
                 01/01/2023, 10:05 - Bob: Hi",
            )
            .unwrap()
    }

    #[test]
    fn test_write_jsonl_basic() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&records(), temp_file.path(), &ExportConfig::new()).unwrap();

        let file = std::fs::File::open(temp_file.path()).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["sender"], "Alice");
        assert_eq!(first["body"], "Hello\nWorld");
        assert_eq!(first["word_count"], 2);

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["sender"], "Bob");
    }

    #[test]
    fn test_to_jsonl_with_date_parts() {
        let jsonl = to_jsonl(&records(), &ExportConfig::new().with_date_parts()).unwrap();
        let first: serde_json::Value = serde_json::from_str(jsonl.lines().next().unwrap()).unwrap();
        assert_eq!(first["date"], "2023-01-01");
        assert_eq!(first["hour"], 10);
    }

    #[test]
    fn test_jsonl_no_array_brackets() {
        let jsonl = to_jsonl(&records(), &ExportConfig::new()).unwrap();
        assert!(!jsonl.starts_with('['));
        assert!(jsonl.ends_with('\n'));
        assert_eq!(to_jsonl(&[], &ExportConfig::new()).unwrap(), "");
    }
}
