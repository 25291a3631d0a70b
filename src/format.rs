//! Output format selection for the flat record table.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::config::ExportConfig;
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::parser::ExportParser;
//!
//! let records = ExportParser::new().parse_str("1/1/23, 10:00 - Alice: Hi")?;
//!
//! // Format detection from extension
//! let format = OutputFormat::from_path("messages.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = to_format_string(&records, format, &ExportConfig::new())?;
//! assert!(jsonl.contains("\"sender\":\"Alice\""));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::error::ChatlensError;
use crate::record::MessageRecord;

/// Output format for the record table.
///
/// - [`Csv`](OutputFormat::Csv) - spreadsheet-friendly table
/// - [`Json`](OutputFormat::Json) - one JSON array
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Comma-separated table (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/Messages.CSV").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("messages.xlsx").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }

    /// Feature that enables the writer for this format.
    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(
        "output",
        format!(
            "Output format {format} requires the '{}' feature to be enabled",
            format.feature()
        ),
    )
}

/// Writes the record table to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[MessageRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &ExportConfig,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts the record table to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[MessageRecord],
    format: OutputFormat,
    config: &ExportConfig,
) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("jsonl").unwrap(), OutputFormat::Jsonl);
        assert_eq!(OutputFormat::from_str("ndjson").unwrap(), OutputFormat::Jsonl);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("a.csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path("a.json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("dir.v2/a.ndjson").unwrap(), OutputFormat::Jsonl);

        let err = OutputFormat::from_path("no_extension").unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(OutputFormat::all().len(), 3);
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
        assert_eq!(OutputFormat::Json.mime_type(), "application/json");
        assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
        let back: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(back, OutputFormat::Csv);
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_to_format_string_all_formats() {
        let records = crate::parser::ExportParser::new()
            .parse_str("1/1/23, 10:00 - Alice: Hi")
            .unwrap();
        let config = ExportConfig::new();
        for format in OutputFormat::all() {
            let output = to_format_string(&records, *format, &config).unwrap();
            assert!(output.contains("Alice"), "{format} output: {output}");
        }
    }
}
