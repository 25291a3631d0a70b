//! Line classification: does a raw line start a new message?

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::pattern::{DateOrder, DatePattern, OrderEvidence};

/// Result of classifying one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// The line begins with an accepted date/time prefix.
    MessageStart(MessageStart<'a>),
    /// The line belongs to the message that is currently open.
    Continuation(&'a str),
}

/// A line that opens a new message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStart<'a> {
    /// Which prefix shape matched.
    pub pattern: DatePattern,
    /// The parsed prefix.
    pub timestamp: NaiveDateTime,
    /// The prefix text as printed, without surrounding brackets or dash.
    pub timestamp_text: &'a str,
    /// Everything after the prefix: `Sender: body` or a system notice.
    pub rest: &'a str,
}

/// A compiled [`DatePattern`].
struct Matcher {
    pattern: DatePattern,
    regex: Regex,
}

impl Matcher {
    fn new(pattern: DatePattern) -> Self {
        Self {
            pattern,
            regex: Regex::new(pattern.pattern()).unwrap(),
        }
    }
}

static MATCHERS: LazyLock<Vec<Matcher>> =
    LazyLock::new(|| DatePattern::all().iter().map(|&p| Matcher::new(p)).collect());

/// Classifies raw lines against the accepted prefix shapes, in order.
///
/// The classifier is stateless apart from the resolved [`DateOrder`], so one
/// instance can classify any number of lines of the same export.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    date_order: DateOrder,
}

impl LineClassifier {
    /// Creates a classifier with a fixed date order.
    ///
    /// [`DateOrder::Auto`] is read as day-first; use
    /// [`for_lines`](Self::for_lines) to infer the order from an export.
    pub fn new(date_order: DateOrder) -> Self {
        Self { date_order }
    }

    /// Creates a classifier for the given export lines, resolving
    /// [`DateOrder::Auto`] from the slash-dated prefixes they contain.
    pub fn for_lines(lines: &[&str], date_order: DateOrder) -> Self {
        if date_order != DateOrder::Auto {
            return Self::new(date_order);
        }

        let mut evidence = OrderEvidence::default();
        for line in lines {
            for matcher in MATCHERS.iter().filter(|m| m.pattern.is_slash_dated()) {
                let Some(caps) = matcher.regex.captures(line) else {
                    continue;
                };
                let field = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());
                if let (Some(f1), Some(f2)) = (field("f1"), field("f2")) {
                    evidence.observe(f1, f2, caps.name("meridiem").is_some());
                }
                break;
            }
        }

        let resolved = evidence.decide();
        tracing::debug!(
            day_first = evidence.day_first,
            month_first = evidence.month_first,
            twelve_hour = evidence.twelve_hour,
            %resolved,
            "resolved date order"
        );
        Self::new(resolved)
    }

    /// The date order used for slash-dated prefixes.
    pub fn date_order(&self) -> DateOrder {
        self.date_order
    }

    /// Classifies one line.
    ///
    /// A line is a [`LineKind::MessageStart`] iff a pattern matches at
    /// position 0 and its captures form a valid timestamp. Anything else,
    /// including blank lines and prefixes with impossible dates, is a
    /// continuation.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        for matcher in MATCHERS.iter() {
            let Some(caps) = matcher.regex.captures(line) else {
                continue;
            };
            let Some(timestamp) = matcher.pattern.timestamp(&caps, self.date_order) else {
                continue;
            };
            let end = caps.get(0).map_or(0, |m| m.end());
            let timestamp_text = line[..end]
                .trim()
                .trim_start_matches('[')
                .trim_end_matches('-')
                .trim_end()
                .trim_end_matches(']');
            return LineKind::MessageStart(MessageStart {
                pattern: matcher.pattern,
                timestamp,
                timestamp_text,
                rest: &line[end..],
            });
        }
        LineKind::Continuation(line)
    }
}
