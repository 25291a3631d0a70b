//! Restricting records to one sender or everyone.
//!
//! Every aggregation takes a slice of records; [`select`] produces that
//! slice for a [`Selector`], so each metric is available overall and per
//! participant.
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{Selector, select, senders};
//! use chatlens::parser::ExportParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = ExportParser::new().parse_str(
//!     "1/1/23, 10:00 - Alice: Hello\n\
//!      1/1/23, 10:05 - Bob: Hi\n\
//!      1/1/23, 10:06 - Alice: How are you?",
//! )?;
//!
//! assert_eq!(senders(&records), vec!["Alice", "Bob"]);
//!
//! let alice = select(&records, &Selector::parse("Alice"));
//! assert_eq!(alice.len(), 2);
//!
//! let everyone = select(&records, &Selector::parse("overall"));
//! assert_eq!(everyone.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact (case-sensitive): display names are data
//! - A sender selector never matches system events
//! - Input order is preserved

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;

/// Name of the "everyone" selector as shown in selector lists.
pub const OVERALL: &str = "Overall";

/// Which records an aggregation should see.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// Every record, system events included.
    #[default]
    Overall,
    /// Only messages written by this participant.
    Sender(String),
}

impl Selector {
    /// Reads a selector from user input.
    ///
    /// `"overall"` in any case selects everyone; anything else is taken as a
    /// sender name verbatim.
    ///
    /// ```
    /// use chatlens::core::filter::Selector;
    ///
    /// assert_eq!(Selector::parse("OVERALL"), Selector::Overall);
    /// assert_eq!(Selector::parse("Alice"), Selector::Sender("Alice".into()));
    /// ```
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case(OVERALL) {
            Selector::Overall
        } else {
            Selector::Sender(value.to_string())
        }
    }

    /// Creates a [`Selector::Sender`].
    pub fn sender(name: impl Into<String>) -> Self {
        Selector::Sender(name.into())
    }

    /// Returns `true` for [`Selector::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, Selector::Overall)
    }

    /// Returns `true` if `record` passes this selector.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Selector::Overall => true,
            Selector::Sender(name) => record.sender().name() == Some(name.as_str()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Overall => f.write_str(OVERALL),
            Selector::Sender(name) => f.write_str(name),
        }
    }
}

/// Returns the records that pass `selector`, in input order.
///
/// [`Selector::Overall`] borrows the input unchanged; a sender selector
/// collects the matching records.
pub fn select<'a>(records: &'a [MessageRecord], selector: &Selector) -> Cow<'a, [MessageRecord]> {
    match selector {
        Selector::Overall => Cow::Borrowed(records),
        Selector::Sender(_) => Cow::Owned(
            records
                .iter()
                .filter(|r| selector.matches(r))
                .cloned()
                .collect(),
        ),
    }
}

/// Returns the distinct participant names, sorted. System events are skipped.
pub fn senders(records: &[MessageRecord]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|r| r.sender().name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
