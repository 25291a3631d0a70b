//! Splitting the text after a timestamp into sender and body.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::Sender;

/// Phrases that mark the "sender" part of a line as a membership or
/// group-settings notice rather than a participant name.
const SYSTEM_PHRASES: &[&str] = &[
    "created group",
    "created this group",
    "added",
    "removed",
    "left",
    "joined",
    "changed the subject",
    "changed the group",
    "changed this group",
    "changed their phone number",
    "security code changed",
    "end-to-end encrypted",
    "now an admin",
    "deleted this group's icon",
    "turned on disappearing messages",
    "turned off disappearing messages",
];

static SYSTEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = SYSTEM_PHRASES
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
});

/// Body-level notices. iOS exports attribute system events to the group
/// name and prefix the notice with a left-to-right mark. Media placeholders
/// carry the same mark, so the mark alone is not enough.
const ENCRYPTION_NOTICE: &str = "Messages and calls are end-to-end encrypted";
const LEFT_TO_RIGHT_MARK: char = '\u{200e}';

/// The parsed remainder of a message line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub sender: Sender,
    pub body: &'a str,
}

/// Splits `rest` (the text after the timestamp prefix) into sender and body.
///
/// The sender is everything before the first `": "` (or a trailing `":"`).
/// The line is a system event when there is no delimiter, the sender is
/// empty or reads like a membership notice, or the body is an application
/// notice. System events keep the whole of `rest` as their body.
///
/// Never fails: unrecognized shapes become system events.
pub fn parse_header(rest: &str) -> Header<'_> {
    let system = Header {
        sender: Sender::System,
        body: rest,
    };

    let Some((sender, body)) = split_sender(rest) else {
        return system;
    };
    let sender = sender.trim();

    if sender.is_empty() || is_system_sender(sender) || is_system_body(body) {
        return system;
    }

    Header {
        sender: Sender::user(sender),
        body,
    }
}

fn split_sender(rest: &str) -> Option<(&str, &str)> {
    if let Some(idx) = rest.find(": ") {
        return Some((&rest[..idx], &rest[idx + 2..]));
    }
    rest.strip_suffix(':').map(|sender| (sender, ""))
}

/// Returns `true` if a would-be sender contains a system-notice phrase
/// as whole words.
pub fn is_system_sender(sender: &str) -> bool {
    SYSTEM_RE.is_match(sender)
}

/// Returns `true` if a message body is an application notice.
pub fn is_system_body(body: &str) -> bool {
    body.contains(ENCRYPTION_NOTICE)
        || body
            .strip_prefix(LEFT_TO_RIGHT_MARK)
            .is_some_and(is_system_sender)
}
