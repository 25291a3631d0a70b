//! Emoji frequency.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;
use crate::resources::EmojiSet;

/// One row of the emoji table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiFrequency {
    pub emoji: String,
    pub count: usize,
}

/// Counts every emoji of `emoji_set` found in user messages, most used first.
///
/// Multi-codepoint emoji count once. Equal counts keep first-appearance
/// order. System events are skipped.
///
/// ```
/// use chatlens::core::emoji::emoji_frequency;
/// use chatlens::parser::ExportParser;
/// use chatlens::resources::EmojiSet;
///
/// let records = ExportParser::new()
///     .parse_str("1/1/23, 10:00 - A: 🔥😂😂\n1/1/23, 10:01 - B: 😂")
///     .unwrap();
/// let table = emoji_frequency(&records, &EmojiSet::default());
///
/// assert_eq!(table[0].emoji, "😂");
/// assert_eq!(table[0].count, 3);
/// assert_eq!(table[1].emoji, "🔥");
/// ```
pub fn emoji_frequency(records: &[MessageRecord], emoji_set: &EmojiSet) -> Vec<EmojiFrequency> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| !r.is_system()) {
        for emoji in emoji_set.find_iter(record.body()) {
            let count = counts.entry(emoji).or_insert_with(|| {
                order.push(emoji);
                0
            });
            *count += 1;
        }
    }

    let mut table: Vec<EmojiFrequency> = order
        .into_iter()
        .map(|emoji| EmojiFrequency {
            emoji: emoji.to_string(),
            count: counts[emoji],
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}
