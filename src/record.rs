//! The normalized message record produced by the parser.
//!
//! A [`MessageRecord`] is one message of the export: its timestamp, its
//! [`Sender`], the full body (continuation lines joined with `\n`) and three
//! fields derived from the body once, when the record is built.
//!
//! # Examples
//!
//! ```
//! use chatlens::{MessageRecord, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let record = MessageRecord::new(ts, Sender::user("Alice"), "Hello\nWorld", "<Media omitted>");
//!
//! assert_eq!(record.word_count(), 2);
//! assert_eq!(record.day_name(), "Sunday");
//! assert!(!record.has_media());
//! ```

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder WhatsApp writes instead of an attachment in "without media" exports.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Label used for system events in flat exports.
pub const SYSTEM_SENDER_LABEL: &str = "group_notification";

/// Weekday names in display order (Monday first).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").unwrap());

/// Who wrote a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// A chat participant, by display name.
    User(String),
    /// A notice written by the chat application itself
    /// (member added/removed, group renamed, encryption notice, ...).
    System,
}

impl Sender {
    /// Creates a [`Sender::User`].
    pub fn user(name: impl Into<String>) -> Self {
        Sender::User(name.into())
    }

    /// Returns the participant name, or `None` for system events.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::User(name) => Some(name),
            Sender::System => None,
        }
    }

    /// Returns `true` for system events.
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }

    /// Returns the flat label used in tables: the name, or
    /// [`SYSTEM_SENDER_LABEL`] for system events.
    pub fn label(&self) -> &str {
        self.name().unwrap_or(SYSTEM_SENDER_LABEL)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One message of a parsed export.
///
/// Records are immutable once built. `word_count`, `has_media` and
/// `has_link` are always computed from the final, joined body.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local time printed in the export |
/// | `sender` | [`Sender`] | Author, or [`Sender::System`] |
/// | `body` | `String` | Full text, continuation lines joined by `\n` |
/// | `word_count` | `usize` | Whitespace-separated tokens of `body` |
/// | `has_media` | `bool` | `body` contains the media placeholder |
/// | `has_link` | `bool` | `body` contains a URL-like substring |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: Sender,
    body: String,
    word_count: usize,
    has_media: bool,
    has_link: bool,
}

impl MessageRecord {
    /// Builds a record and computes its derived fields from `body`.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: Sender,
        body: impl Into<String>,
        media_placeholder: &str,
    ) -> Self {
        let body = body.into();
        Self {
            word_count: count_words(&body),
            has_media: contains_media(&body, media_placeholder),
            has_link: contains_link(&body),
            timestamp,
            sender,
            body,
        }
    }

    /// When the message was sent, as printed in the export.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Who sent the message.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Full message text.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn has_media(&self) -> bool {
        self.has_media
    }

    pub fn has_link(&self) -> bool {
        self.has_link
    }

    /// Returns `true` if this record is a system event.
    pub fn is_system(&self) -> bool {
        self.sender.is_system()
    }

    // =========================================================================
    // Calendar parts
    // =========================================================================

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Month number, 1 to 12.
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// English month name ("January").
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.timestamp.month0() as usize]
    }

    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// Weekday index, Monday = 0.
    pub fn weekday_index(&self) -> usize {
        self.weekday().num_days_from_monday() as usize
    }

    /// English weekday name ("Monday").
    pub fn day_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday_index()]
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    /// One-hour bucket label, see [`period_label`].
    pub fn period(&self) -> String {
        period_label(self.hour())
    }
}

/// Label for the one-hour bucket starting at `hour`: `"09-10"`, with the
/// day wrapping as `"23-00"`.
pub fn period_label(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// Counts whitespace-separated tokens.
pub fn count_words(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Returns `true` if `body` contains the media placeholder.
///
/// An empty placeholder never matches.
pub fn contains_media(body: &str, placeholder: &str) -> bool {
    !placeholder.is_empty() && body.contains(placeholder)
}

/// Returns `true` if `body` contains something that looks like a URL.
pub fn contains_link(body: &str) -> bool {
    LINK_RE.is_match(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let record = MessageRecord::new(
            ts(2023, 1, 1, 10, 0),
            Sender::user("Alice"),
            "see https://example.com now",
            DEFAULT_MEDIA_PLACEHOLDER,
        );
        assert_eq!(record.word_count(), 3);
        assert!(record.has_link());
        assert!(!record.has_media());
        assert!(!record.is_system());
    }

    #[test]
    fn test_media_placeholder_counts_words() {
        let record = MessageRecord::new(
            ts(2023, 1, 1, 10, 0),
            Sender::user("Alice"),
            "<Media omitted>",
            DEFAULT_MEDIA_PLACEHOLDER,
        );
        assert!(record.has_media());
        assert_eq!(record.word_count(), 2);
    }

    #[test]
    fn test_media_inside_longer_body() {
        assert!(contains_media("look <Media omitted> here", DEFAULT_MEDIA_PLACEHOLDER));
        assert!(!contains_media("media omitted", DEFAULT_MEDIA_PLACEHOLDER));
        assert!(!contains_media("anything", ""));
    }

    #[test]
    fn test_link_detection() {
        assert!(contains_link("http://a.b"));
        assert!(contains_link("visit WWW.example.org"));
        assert!(contains_link("line1\nhttps://x.y/z?q=1"));
        assert!(!contains_link("no links here"));
        assert!(!contains_link("https://"));
    }

    #[test]
    fn test_count_words_multiline() {
        assert_eq!(count_words("Hello\nWorld"), 2);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("a\tb  c\n\nd"), 4);
    }

    #[test]
    fn test_calendar_parts() {
        // 2024-03-15 is a Friday
        let record = MessageRecord::new(
            ts(2024, 3, 15, 23, 45),
            Sender::System,
            "Alice added Bob",
            DEFAULT_MEDIA_PLACEHOLDER,
        );
        assert_eq!(record.year(), 2024);
        assert_eq!(record.month(), 3);
        assert_eq!(record.month_name(), "March");
        assert_eq!(record.day(), 15);
        assert_eq!(record.day_name(), "Friday");
        assert_eq!(record.weekday_index(), 4);
        assert_eq!(record.hour(), 23);
        assert_eq!(record.minute(), 45);
        assert_eq!(record.period(), "23-00");
        assert!(record.is_system());
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(0), "00-01");
        assert_eq!(period_label(9), "09-10");
        assert_eq!(period_label(23), "23-00");
    }

    #[test]
    fn test_sender_label() {
        assert_eq!(Sender::user("Bob").label(), "Bob");
        assert_eq!(Sender::System.label(), SYSTEM_SENDER_LABEL);
        assert_eq!(Sender::System.to_string(), "group_notification");
        assert_eq!(Sender::user("Bob").name(), Some("Bob"));
        assert_eq!(Sender::System.name(), None);
    }
}
