//! Ranking participants by message count.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;

/// One row of the user ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRank {
    pub sender: String,
    pub count: usize,
    /// Share of all non-system messages, 0 to 100, two decimals.
    pub percentage: f64,
}

/// Ranks every participant by message count, most active first.
///
/// System events are excluded from both the counts and the percentage
/// denominator. Equal counts keep the order in which senders first appear.
///
/// ```
/// use chatlens::core::users::most_active_users;
/// use chatlens::parser::ExportParser;
///
/// let records = ExportParser::new()
///     .parse_str("1/1/23, 10:00 - Bob: a\n1/1/23, 10:01 - Alice: b\n1/1/23, 10:02 - Alice: c")
///     .unwrap();
/// let ranking = most_active_users(&records);
///
/// assert_eq!(ranking[0].sender, "Alice");
/// assert_eq!(ranking[0].count, 2);
/// assert!((ranking[0].percentage - 66.67).abs() < 1e-9);
/// ```
pub fn most_active_users(records: &[MessageRecord]) -> Vec<UserRank> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for name in records.iter().filter_map(|r| r.sender().name()) {
        let count = counts.entry(name).or_insert_with(|| {
            order.push(name);
            0
        });
        *count += 1;
    }

    let total: usize = counts.values().sum();
    let mut ranking: Vec<UserRank> = order
        .into_iter()
        .map(|name| {
            let count = counts[name];
            UserRank {
                sender: name.to_string(),
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();

    // Stable sort keeps first-appearance order among ties.
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

/// `100 * count / total` rounded to two decimals; 0 when `total` is 0.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = 100.0 * count as f64 / total as f64;
    (raw * 100.0).round() / 100.0
}
