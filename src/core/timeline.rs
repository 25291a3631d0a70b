//! Message counts over time.
//!
//! Both timelines are sorted by the calendar value of their key, never by
//! the order records appear in, and only contain periods with messages.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::LabeledCount;
use crate::record::{MONTH_NAMES, MessageRecord};

/// Counts per (year, month), labelled `"January-2023"`.
///
/// ```
/// use chatlens::core::timeline::monthly_timeline;
/// use chatlens::parser::ExportParser;
///
/// let records = ExportParser::new()
///     .parse_str("2/1/23, 10:00 - A: x\n5/1/23, 10:00 - B: y\n1/2/23, 09:00 - A: z")
///     .unwrap();
/// let timeline = monthly_timeline(&records);
///
/// assert_eq!(timeline[0].label, "January-2023");
/// assert_eq!(timeline[0].count, 2);
/// assert_eq!(timeline[1].label, "February-2023");
/// ```
pub fn monthly_timeline(records: &[MessageRecord]) -> Vec<LabeledCount> {
    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in records {
        *counts.entry((record.year(), record.month())).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((year, month), count)| {
            LabeledCount::new(format!("{}-{}", MONTH_NAMES[month as usize - 1], year), count)
        })
        .collect()
}

/// Counts per calendar date, labelled `YYYY-MM-DD`.
pub fn daily_timeline(records: &[MessageRecord]) -> Vec<LabeledCount> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.date()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(date, count)| LabeledCount::new(date.format("%Y-%m-%d").to_string(), count))
        .collect()
}
