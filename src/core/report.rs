//! Every dashboard table for one selector.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::filter::Selector;
//! use chatlens::core::report::Report;
//! use chatlens::parser::ExportParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = ExportParser::new().parse_str(
//!     "1/1/23, 10:00 - Alice: Hello\nWorld\n1/1/23, 10:05 - Bob: Hi",
//! )?;
//!
//! let report = Report::build(&records, &Selector::Overall, &AnalysisConfig::default());
//! assert_eq!(report.stats.total_messages, 2);
//! assert_eq!(report.users.as_ref().map(Vec::len), Some(2));
//!
//! let alice = Report::build(&records, &Selector::sender("Alice"), &AnalysisConfig::default());
//! assert_eq!(alice.stats.total_messages, 1);
//! assert!(alice.users.is_none());
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use super::LabeledCount;
use super::activity::{Heatmap, activity_heatmap, month_activity, week_activity};
use super::emoji::{EmojiFrequency, emoji_frequency};
use super::filter::{Selector, select};
use super::stats::{ScalarStats, fetch_stats};
use super::timeline::{daily_timeline, monthly_timeline};
use super::users::{UserRank, most_active_users};
use super::words::{WordFrequency, most_common_words};
use crate::config::AnalysisConfig;
use crate::record::MessageRecord;

/// The aggregation results for one selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub selector: Selector,
    pub stats: ScalarStats,
    pub monthly_timeline: Vec<LabeledCount>,
    pub daily_timeline: Vec<LabeledCount>,
    pub week_activity: Vec<LabeledCount>,
    pub month_activity: Vec<LabeledCount>,
    pub heatmap: Heatmap,
    /// Top-N participants; only computed for [`Selector::Overall`].
    pub users: Option<Vec<UserRank>>,
    pub words: Vec<WordFrequency>,
    pub emoji: Vec<EmojiFrequency>,
}

impl Report {
    /// Filters `records` by `selector` and runs every aggregation on the result.
    pub fn build(records: &[MessageRecord], selector: &Selector, config: &AnalysisConfig) -> Self {
        let selected = select(records, selector);
        let selected = selected.as_ref();

        let users = selector.is_overall().then(|| {
            let mut ranking = most_active_users(selected);
            ranking.truncate(config.top_n);
            ranking
        });

        let report = Self {
            selector: selector.clone(),
            stats: fetch_stats(selected),
            monthly_timeline: monthly_timeline(selected),
            daily_timeline: daily_timeline(selected),
            week_activity: week_activity(selected),
            month_activity: month_activity(selected),
            heatmap: activity_heatmap(selected),
            users,
            words: most_common_words(
                selected,
                &config.stop_words,
                &config.media_placeholder,
                config.top_n,
            ),
            emoji: emoji_frequency(selected, &config.emoji),
        };

        tracing::debug!(
            selector = %report.selector,
            messages = report.stats.total_messages,
            "report built"
        );
        report
    }
}
