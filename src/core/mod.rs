//! Aggregations over parsed records.
//!
//! This module contains:
//! - [`filter`] - Restricting records to one sender or everyone
//! - [`stats`] - Headline counts
//! - [`timeline`] - Monthly and daily message counts
//! - [`activity`] - Weekday, month and weekday × hour activity
//! - [`users`] - Participant ranking
//! - [`words`] - Word frequency with stop-word removal
//! - [`emoji`] - Emoji frequency
//! - [`report`] - All of the above for one selector
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! Every aggregation is a pure function of `&[MessageRecord]`. None of them
//! fail, and all of them accept an empty slice.
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{Selector, fetch_stats, most_active_users, select};
//! use chatlens::parser::ExportParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = ExportParser::new().parse_str("1/1/23, 10:00 - Alice: Hi")?;
//! let alice = select(&records, &Selector::sender("Alice"));
//!
//! assert_eq!(fetch_stats(&alice).total_messages, 1);
//! assert_eq!(most_active_users(&records)[0].sender, "Alice");
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod emoji;
pub mod filter;
pub mod output;
pub mod report;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

use serde::{Deserialize, Serialize};

pub use activity::{Heatmap, activity_heatmap, month_activity, week_activity};
pub use emoji::{EmojiFrequency, emoji_frequency};
pub use filter::{Selector, select, senders};
pub use report::Report;
pub use stats::{ScalarStats, fetch_stats};
pub use timeline::{daily_timeline, monthly_timeline};
pub use users::{UserRank, most_active_users};
pub use words::{WordFrequency, most_common_words, tokenize};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{summary_to_csv, to_csv, write_csv, write_summary_csv};
#[cfg(feature = "json-output")]
pub use output::{report_to_json, to_json, to_jsonl, write_json, write_jsonl, write_report_json};

/// A (label, count) row of a timeline or activity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: usize,
}

impl LabeledCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}
