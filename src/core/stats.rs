//! Headline counts for a set of records.

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;

/// The four numbers at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScalarStats {
    /// Records, system events included
    pub total_messages: usize,
    /// Sum of `word_count`
    pub total_words: usize,
    /// Records with the media placeholder
    pub media_count: usize,
    /// Records containing a link
    pub link_count: usize,
}

impl ScalarStats {
    /// Rows of the summary table, in display order.
    pub fn rows(&self) -> [(&'static str, usize); 4] {
        [
            ("Total Messages", self.total_messages),
            ("Total Words", self.total_words),
            ("Media Shared", self.media_count),
            ("Links Shared", self.link_count),
        ]
    }

    /// Average words per message, 0 for no messages.
    pub fn words_per_message(&self) -> f64 {
        if self.total_messages == 0 {
            return 0.0;
        }
        self.total_words as f64 / self.total_messages as f64
    }
}

/// Computes [`ScalarStats`] in one pass.
///
/// ```
/// use chatlens::core::stats::fetch_stats;
///
/// assert_eq!(fetch_stats(&[]).total_messages, 0);
/// ```
pub fn fetch_stats(records: &[MessageRecord]) -> ScalarStats {
    records
        .iter()
        .fold(ScalarStats::default(), |mut stats, record| {
            stats.total_messages += 1;
            stats.total_words += record.word_count();
            stats.media_count += usize::from(record.has_media());
            stats.link_count += usize::from(record.has_link());
            stats
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ExportParser;

    #[test]
    fn test_fetch_stats() {
        let records = ExportParser::new()
            .parse_str(
                "1/1/23, 10:00 - Alice: Hello\nWorld\n\
                 1/1/23, 10:05 - Bob: <Media omitted>\n\
                 1/1/23, 10:06 - Bob: see https://example.com\n\
                 1/1/23, 10:10 - Alice added Carol",
            )
            .unwrap();
        let stats = fetch_stats(&records);
        assert_eq!(stats.total_messages, 4);
        assert_eq!(stats.total_words, 2 + 2 + 2 + 3);
        assert_eq!(stats.media_count, 1);
        assert_eq!(stats.link_count, 1);
    }

    #[test]
    fn test_empty_stats() {
        let stats = fetch_stats(&[]);
        assert_eq!(stats, ScalarStats::default());
        assert!(stats.words_per_message().abs() < f64::EPSILON);
    }

    #[test]
    fn test_rows_order() {
        let stats = ScalarStats {
            total_messages: 4,
            total_words: 10,
            media_count: 1,
            link_count: 2,
        };
        let labels: Vec<&str> = stats.rows().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Total Messages", "Total Words", "Media Shared", "Links Shared"]
        );
        assert!((stats.words_per_message() - 2.5).abs() < f64::EPSILON);
    }
}
