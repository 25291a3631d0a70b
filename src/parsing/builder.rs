//! Assembling classified lines into [`MessageRecord`]s.

use chrono::NaiveDateTime;

use crate::record::{MessageRecord, Sender};

use super::header::Header;

/// The message currently being accumulated.
#[derive(Debug)]
struct OpenRecord {
    timestamp: NaiveDateTime,
    sender: Sender,
    body: String,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Open(OpenRecord),
}

/// Two-state accumulator: either no message is open, or one is and
/// continuation lines are appended to it.
///
/// # Example
///
/// ```
/// use chatlens::parsing::{RecordBuilder, parse_header};
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let mut builder = RecordBuilder::new("<Media omitted>");
/// builder.start(ts, parse_header("Alice: Hello"));
/// assert!(builder.append("World"));
///
/// let records = builder.finish();
/// assert_eq!(records[0].body(), "Hello\nWorld");
/// assert_eq!(records[0].word_count(), 2);
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    state: State,
    records: Vec<MessageRecord>,
    media_placeholder: String,
}

impl RecordBuilder {
    /// Creates an idle builder. `media_placeholder` feeds
    /// [`MessageRecord::has_media`].
    pub fn new(media_placeholder: impl Into<String>) -> Self {
        Self {
            state: State::Idle,
            records: Vec::new(),
            media_placeholder: media_placeholder.into(),
        }
    }

    /// Returns `true` if a message is open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Number of records flushed so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && !self.is_open()
    }

    /// Flushes the open message, if any, and opens a new one.
    pub fn start(&mut self, timestamp: NaiveDateTime, header: Header<'_>) {
        self.flush();
        self.state = State::Open(OpenRecord {
            timestamp,
            sender: header.sender,
            body: header.body.to_string(),
        });
    }

    /// Appends a continuation line to the open message.
    ///
    /// Returns `false` (and drops nothing, since nothing is stored) when no
    /// message is open.
    pub fn append(&mut self, line: &str) -> bool {
        match &mut self.state {
            State::Open(open) => {
                open.body.push('\n');
                open.body.push_str(line);
                true
            }
            State::Idle => false,
        }
    }

    fn flush(&mut self) {
        if let State::Open(open) = std::mem::take(&mut self.state) {
            let body = open.body.trim_end();
            self.records.push(MessageRecord::new(
                open.timestamp,
                open.sender,
                body,
                &self.media_placeholder,
            ));
        }
    }

    /// Flushes the last open message and returns every record in input order.
    pub fn finish(mut self) -> Vec<MessageRecord> {
        self.flush();
        tracing::debug!(records = self.records.len(), "record builder finished");
        self.records
    }
}
