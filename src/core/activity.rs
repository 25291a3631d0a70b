//! Activity by weekday, by month and by (weekday, hour).
//!
//! Unlike the timelines, these tables have fixed shapes: every weekday and
//! every month is present, in calendar order, with zero counts kept.

use serde::{Deserialize, Serialize};

use super::LabeledCount;
use crate::record::{MONTH_NAMES, MessageRecord, WEEKDAY_NAMES, period_label};

/// Hour buckets per heatmap row.
pub const HOURS: usize = 24;

/// Messages per weekday, Monday to Sunday.
pub fn week_activity(records: &[MessageRecord]) -> Vec<LabeledCount> {
    let mut counts = [0usize; 7];
    for record in records {
        counts[record.weekday_index()] += 1;
    }
    WEEKDAY_NAMES
        .iter()
        .zip(counts)
        .map(|(name, count)| LabeledCount::new(*name, count))
        .collect()
}

/// Messages per month name, January to December, across all years.
pub fn month_activity(records: &[MessageRecord]) -> Vec<LabeledCount> {
    let mut counts = [0usize; 12];
    for record in records {
        counts[record.month() as usize - 1] += 1;
    }
    MONTH_NAMES
        .iter()
        .zip(counts)
        .map(|(name, count)| LabeledCount::new(*name, count))
        .collect()
}

/// A dense weekday × hour count matrix.
///
/// Rows are weekdays (Monday first), columns are one-hour periods
/// (`"00-01"` to `"23-00"`).
///
/// ```
/// use chatlens::core::activity::activity_heatmap;
/// use chatlens::parser::ExportParser;
///
/// // 2 January 2023 is a Monday
/// let records = ExportParser::new()
///     .parse_str("02/01/2023, 09:15 - A: x\n02/01/2023, 09:45 - B: y")
///     .unwrap();
/// let heatmap = activity_heatmap(&records);
///
/// assert_eq!(heatmap.get(0, 9), 2);
/// assert_eq!(heatmap.total(), 2);
/// assert_eq!(heatmap.column_labels()[9], "09-10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    rows: Vec<String>,
    columns: Vec<String>,
    cells: [[usize; HOURS]; 7],
}

impl Heatmap {
    fn empty() -> Self {
        Self {
            rows: WEEKDAY_NAMES.iter().map(|d| (*d).to_string()).collect(),
            columns: (0..HOURS as u32).map(period_label).collect(),
            cells: [[0; HOURS]; 7],
        }
    }

    /// Weekday names, one per row.
    pub fn row_labels(&self) -> &[String] {
        &self.rows
    }

    /// Period labels, one per column.
    pub fn column_labels(&self) -> &[String] {
        &self.columns
    }

    /// The count matrix, indexed `[weekday][hour]`.
    pub fn cells(&self) -> &[[usize; HOURS]; 7] {
        &self.cells
    }

    /// Count for a weekday (Monday = 0) and hour. Out-of-range indices read 0.
    pub fn get(&self, weekday: usize, hour: usize) -> usize {
        self.cells
            .get(weekday)
            .and_then(|row| row.get(hour))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Largest cell value, for scaling a rendering.
    pub fn max(&self) -> usize {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl Default for Heatmap {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builds the weekday × hour heatmap. Every record lands in exactly one cell.
pub fn activity_heatmap(records: &[MessageRecord]) -> Heatmap {
    let mut heatmap = Heatmap::empty();
    for record in records {
        heatmap.cells[record.weekday_index()][record.hour() as usize] += 1;
    }
    heatmap
}
