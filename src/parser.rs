//! The export parser: raw text in, ordered [`MessageRecord`]s out.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ExportParser;
//! use chatlens::Sender;
//!
//! let parser = ExportParser::new();
//! let records = parser
//!     .parse_str("1/1/23, 10:00 - Alice: Hello\nWorld\n1/1/23, 10:05 - Bob: Hi")
//!     .unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender(), &Sender::user("Alice"));
//! assert_eq!(records[0].body(), "Hello\nWorld");
//! assert_eq!(records[1].word_count(), 1);
//! ```

use std::fs;
use std::path::Path;

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::{LineClassifier, LineKind, RecordBuilder, parse_header};
use crate::record::MessageRecord;

const BOM: char = '\u{feff}';

/// Parses WhatsApp text exports.
///
/// Parsing is one pass over the lines of the input. Every line ends up in
/// exactly one record: prefixed lines open a record, everything else is
/// appended to the open one. The only structural failure is content before
/// the first message boundary.
#[derive(Debug, Clone, Default)]
pub struct ExportParser {
    config: ParserConfig,
}

impl ExportParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::Io`] if the file cannot be read
    /// - [`ChatlensError::Decoding`] if it is not UTF-8
    /// - [`ChatlensError::MalformedExport`] (with the path attached) if
    ///   content precedes the first message
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        self.parse_bytes(&bytes).map_err(|e| e.with_path(path))
    }

    /// Decodes UTF-8 bytes and parses them.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<MessageRecord>> {
        let content = std::str::from_utf8(bytes)?;
        self.parse_str(content)
    }

    /// Parses export content already in memory.
    ///
    /// Empty input (or input with only blank lines) yields an empty vector.
    pub fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>> {
        let content = content.strip_prefix(BOM).unwrap_or(content);
        let lines: Vec<&str> = content.lines().collect();

        let classifier = LineClassifier::for_lines(&lines, self.config.date_order);
        let mut builder = RecordBuilder::new(self.config.media_placeholder.as_str());

        for (idx, line) in lines.iter().enumerate() {
            match classifier.classify(line) {
                LineKind::MessageStart(start) => {
                    builder.start(start.timestamp, parse_header(start.rest));
                }
                LineKind::Continuation(text) => {
                    if builder.append(text) {
                        tracing::trace!(line = idx + 1, "continuation line");
                    } else if !text.trim().is_empty() {
                        return Err(ChatlensError::malformed_export(idx + 1, text, None));
                    }
                }
            }
        }

        let records = builder.finish();
        let system = records.iter().filter(|r| r.is_system()).count();
        tracing::debug!(
            lines = lines.len(),
            records = records.len(),
            system,
            date_order = %classifier.date_order(),
            "parsed export"
        );
        Ok(records)
    }
}
