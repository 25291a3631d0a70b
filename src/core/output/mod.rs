//! Output format writers.
//!
//! This module provides writers for the flat record table and the
//! aggregation results:
//! - [`write_csv`] / [`to_csv`] - record table as CSV - requires `csv-output` feature
//! - [`write_summary_csv`] / [`summary_to_csv`] - `Metric,Value` table of [`ScalarStats`](crate::core::ScalarStats) - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - record table as a JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON record per line - requires `json-output` feature
//! - [`write_report_json`] / [`report_to_json`] - a full [`Report`](crate::core::Report) - requires `json-output` feature
//!
//! # Record columns
//!
//! | Column | Example |
//! |--------|---------|
//! | `timestamp` | `2023-01-01 10:00:00` |
//! | `sender` | `Alice`, or `group_notification` for system events |
//! | `body` | `Hello\nWorld` |
//! | `word_count` | `2` |
//! | `has_media` | `false` |
//! | `has_link` | `false` |
//!
//! With [`ExportConfig::with_date_parts`](crate::config::ExportConfig::with_date_parts)
//! the columns `date`, `year`, `month_num`, `month`, `day`, `day_name`,
//! `hour`, `minute` and `period` follow.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::ExportConfig;
//! use chatlens::core::output::{to_csv, write_csv, write_jsonl};
//! use chatlens::parser::ExportParser;
//!
//! let records = ExportParser::new().parse(std::path::Path::new("chat.txt"))?;
//! let config = ExportConfig::new().with_date_parts();
//!
//! write_csv(&records, "messages.csv", &config)?;
//! write_jsonl(&records, "messages.jsonl", &config)?;
//!
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{summary_to_csv, to_csv, write_csv, write_summary_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, to_json, write_json, write_report_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(any(feature = "csv-output", feature = "json-output"))]
pub(crate) use flat::FlatRecord;

#[cfg(any(feature = "csv-output", feature = "json-output"))]
mod flat {
    use serde::Serialize;

    use crate::config::ExportConfig;
    use crate::record::MessageRecord;

    const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Calendar columns added by `include_date_parts`.
    #[derive(Debug, Serialize)]
    pub(crate) struct DateParts {
        pub date: String,
        pub year: i32,
        pub month_num: u32,
        pub month: &'static str,
        pub day: u32,
        pub day_name: &'static str,
        pub hour: u32,
        pub minute: u32,
        pub period: String,
    }

    /// One row of the flat record table.
    #[derive(Debug, Serialize)]
    pub(crate) struct FlatRecord<'a> {
        pub timestamp: String,
        pub sender: &'a str,
        pub body: &'a str,
        pub word_count: usize,
        pub has_media: bool,
        pub has_link: bool,
        #[serde(flatten)]
        pub date_parts: Option<DateParts>,
    }

    impl<'a> FlatRecord<'a> {
        pub const COLUMNS: [&'static str; 6] = [
            "timestamp",
            "sender",
            "body",
            "word_count",
            "has_media",
            "has_link",
        ];

        pub const DATE_PART_COLUMNS: [&'static str; 9] = [
            "date",
            "year",
            "month_num",
            "month",
            "day",
            "day_name",
            "hour",
            "minute",
            "period",
        ];

        pub fn new(record: &'a MessageRecord, config: &ExportConfig) -> Self {
            Self {
                timestamp: record.timestamp().format(TIMESTAMP_FORMAT).to_string(),
                sender: record.sender().label(),
                body: record.body(),
                word_count: record.word_count(),
                has_media: record.has_media(),
                has_link: record.has_link(),
                date_parts: config.include_date_parts.then(|| DateParts {
                    date: record.date().format("%Y-%m-%d").to_string(),
                    year: record.year(),
                    month_num: record.month(),
                    month: record.month_name(),
                    day: record.day(),
                    day_name: record.day_name(),
                    hour: record.hour(),
                    minute: record.minute(),
                    period: record.period(),
                }),
            }
        }

        /// Column names for `config`, in row order.
        #[cfg_attr(not(feature = "csv-output"), allow(dead_code))]
        pub fn header(config: &ExportConfig) -> Vec<&'static str> {
            let mut header = Self::COLUMNS.to_vec();
            if config.include_date_parts {
                header.extend(Self::DATE_PART_COLUMNS);
            }
            header
        }

        /// Field values as text, in [`header`](Self::header) order.
        #[cfg_attr(not(feature = "csv-output"), allow(dead_code))]
        pub fn fields(&self) -> Vec<String> {
            let mut fields = vec![
                self.timestamp.clone(),
                self.sender.to_string(),
                self.body.to_string(),
                self.word_count.to_string(),
                self.has_media.to_string(),
                self.has_link.to_string(),
            ];
            if let Some(parts) = &self.date_parts {
                fields.extend([
                    parts.date.clone(),
                    parts.year.to_string(),
                    parts.month_num.to_string(),
                    parts.month.to_string(),
                    parts.day.to_string(),
                    parts.day_name.to_string(),
                    parts.hour.to_string(),
                    parts.minute.to_string(),
                    parts.period.clone(),
                ]);
            }
            fields
        }
    }
}
