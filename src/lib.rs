//! # chatlens
//!
//! A Rust library for turning WhatsApp group-chat exports into a table of
//! messages and the statistics built from it.
//!
//! ## Overview
//!
//! A WhatsApp "export chat" file is loosely structured text: every message
//! starts with a locale-dependent date/time prefix, may run over several
//! lines, and is interleaved with system notices ("Alice added Bob").
//! chatlens parses it in one pass into ordered [`MessageRecord`]s and
//! computes, for everyone or for one participant:
//!
//! - headline counts (messages, words, media, links)
//! - monthly and daily timelines
//! - activity by weekday, by month and by weekday × hour
//! - the most active participants
//! - the most common words (stop words removed) and emoji
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = ExportParser::new().parse_str(
//!         "1/1/23, 10:00 - Alice: Hello\nWorld\n\
//!          1/1/23, 10:05 - Bob: Hi\n\
//!          1/1/23, 10:10 - Alice added Carol",
//!     )?;
//!
//!     let stats = fetch_stats(&records);
//!     assert_eq!(stats.total_messages, 3);
//!
//!     let ranking = most_active_users(&records);
//!     assert_eq!(ranking[0].sender, "Alice");
//!
//!     let report = Report::build(&records, &Selector::sender("Bob"), &AnalysisConfig::default());
//!     assert_eq!(report.stats.total_messages, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ExportParser`](parser::ExportParser): bytes or text in, records out
//! - [`parsing`] - the parser's stages: date patterns, line classifier,
//!   header parser, record builder
//! - [`record`] - [`MessageRecord`] and [`Sender`]
//! - [`core`] - filtering, aggregations, [`Report`](core::Report) and output writers
//! - [`resources`] - stop-word list and emoji set
//! - [`config`] - parser, analysis and export configuration
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`cli`] - CLI arguments and the text dashboard (feature `cli`)
//! - [`error`] - [`ChatlensError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod resources;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use record::{MessageRecord, Sender};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{MessageRecord, Sender};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::ExportParser;
    pub use crate::parsing::DateOrder;

    // Configuration and resources
    pub use crate::config::{AnalysisConfig, ExportConfig, ParserConfig};
    pub use crate::resources::{EmojiSet, StopWords};

    // Filtering and aggregations
    pub use crate::core::{
        Heatmap, LabeledCount, Report, ScalarStats, Selector, activity_heatmap, daily_timeline,
        emoji_frequency, fetch_stats, month_activity, monthly_timeline, most_active_users,
        most_common_words, select, senders, week_activity,
    };

    // Output
    pub use crate::format::OutputFormat;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv, write_summary_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl, write_report_json};
}
