//! Accepted date/time prefix shapes.
//!
//! WhatsApp prints every message as `<date>, <time> - Sender: text` or
//! `[<date>, <time>] Sender: text`, with separators and clock style that
//! depend on the phone's locale and platform. Each shape is one
//! [`DatePattern`] variant; the classifier tries them in [`DatePattern::all`]
//! order, so a new export style is a new variant, not an edit to an old one.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Captures;
use serde::{Deserialize, Serialize};

/// A date/time prefix shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatePattern {
    /// iOS style with slashes, optional seconds and AM/PM.
    /// Example: `[1/15/24, 10:30:45 AM] Alice: Hello`
    BracketedSlash,
    /// iOS style with dots.
    /// Example: `[15.01.24, 10:30:45] Alice: Hello`
    BracketedDot,
    /// Android style with slashes, 24-hour or AM/PM.
    /// Example: `15/01/2024, 10:30 - Alice: Hello`
    DashSlash,
    /// Android style with dots.
    /// Example: `26.10.2025, 20:40 - Alice: Hello`
    DashDot,
    /// ISO dates.
    /// Example: `2024-01-15, 10:30 - Alice: Hello`
    DashIso,
}

/// How the two numeric date fields of a pattern map to month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    DayMonth,
    MonthDay,
}

impl DatePattern {
    /// Returns all patterns in the order the classifier tries them.
    pub fn all() -> &'static [DatePattern] {
        &[
            DatePattern::BracketedSlash,
            DatePattern::BracketedDot,
            DatePattern::DashSlash,
            DatePattern::DashDot,
            DatePattern::DashIso,
        ]
    }

    /// Returns the regex for this prefix shape, anchored at the start of a line.
    ///
    /// Named groups: `f1`, `f2` (day/month in printed order), `year`,
    /// `hour`, `minute`, optional `second` and `meridiem`.
    pub fn pattern(self) -> &'static str {
        match self {
            DatePattern::BracketedSlash => {
                r"^\[(?P<f1>\d{1,2})/(?P<f2>\d{1,2})/(?P<year>\d{4}|\d{2}),\s*(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?(?:\s*(?P<meridiem>[AaPp])\.?\s?[Mm]\.?)?\]\s*"
            }
            DatePattern::BracketedDot => {
                r"^\[(?P<f1>\d{1,2})\.(?P<f2>\d{1,2})\.(?P<year>\d{4}|\d{2}),\s*(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?\]\s*"
            }
            DatePattern::DashSlash => {
                r"^(?P<f1>\d{1,2})/(?P<f2>\d{1,2})/(?P<year>\d{4}|\d{2}),\s*(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?(?:\s*(?P<meridiem>[AaPp])\.?\s?[Mm]\.?)?\s*-\s*"
            }
            DatePattern::DashDot => {
                r"^(?P<f1>\d{1,2})\.(?P<f2>\d{1,2})\.(?P<year>\d{4}|\d{2}),\s*(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?\s*-\s*"
            }
            DatePattern::DashIso => {
                r"^(?P<year>\d{4})-(?P<f1>\d{1,2})-(?P<f2>\d{1,2}),\s*(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?\s*-\s*"
            }
        }
    }

    /// Returns `true` if the day/month order of this pattern is ambiguous.
    pub fn is_slash_dated(self) -> bool {
        matches!(self, DatePattern::BracketedSlash | DatePattern::DashSlash)
    }

    fn field_order(self, order: DateOrder) -> FieldOrder {
        match self {
            DatePattern::BracketedDot | DatePattern::DashDot => FieldOrder::DayMonth,
            DatePattern::DashIso => FieldOrder::MonthDay,
            DatePattern::BracketedSlash | DatePattern::DashSlash => match order {
                DateOrder::MonthFirst => FieldOrder::MonthDay,
                DateOrder::DayFirst | DateOrder::Auto => FieldOrder::DayMonth,
            },
        }
    }

    /// Converts the captures of [`pattern`](Self::pattern) into a timestamp.
    ///
    /// Returns `None` when the captured fields do not form a real
    /// calendar date and clock time.
    pub(crate) fn timestamp(self, caps: &Captures<'_>, order: DateOrder) -> Option<NaiveDateTime> {
        let num = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());

        let (f1, f2) = (num("f1")?, num("f2")?);
        let year_text = caps.name("year")?.as_str();
        let mut year: i32 = year_text.parse().ok()?;
        if year_text.len() == 2 {
            year += 2000;
        }

        let (month, day) = match self.field_order(order) {
            FieldOrder::DayMonth => (f2, f1),
            FieldOrder::MonthDay => (f1, f2),
        };

        let meridiem = caps.name("meridiem").map(|m| m.as_str());
        let hour = to_24_hour(num("hour")?, meridiem)?;
        let second = num("second").unwrap_or(0);

        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, num("minute")?, second)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatePattern::BracketedSlash => "[D/M/Y, H:MM]",
            DatePattern::BracketedDot => "[D.M.Y, H:MM]",
            DatePattern::DashSlash => "D/M/Y, H:MM -",
            DatePattern::DashDot => "D.M.Y, H:MM -",
            DatePattern::DashIso => "YYYY-MM-DD, H:MM -",
        };
        f.write_str(name)
    }
}

/// Converts a printed hour to 0..=23. `meridiem` is the first letter of
/// AM/PM when the export uses a 12-hour clock.
fn to_24_hour(hour: u32, meridiem: Option<&str>) -> Option<u32> {
    match meridiem {
        None => (hour < 24).then_some(hour),
        Some(_) if !(1..=12).contains(&hour) => None,
        Some(m) if m.eq_ignore_ascii_case("a") => Some(hour % 12),
        Some(_) => Some(hour % 12 + 12),
    }
}

/// Day/month order of slash-separated dates.
///
/// `1/2/23` is the 1st of February in most locales and January 2nd in the
/// US. [`Auto`](DateOrder::Auto) decides once per export from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// Infer from the export (default).
    #[default]
    Auto,
    /// `D/M/Y`
    DayFirst,
    /// `M/D/Y`
    MonthFirst,
}

/// Evidence collected from one slash-dated prefix.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OrderEvidence {
    pub day_first: usize,
    pub month_first: usize,
    pub twelve_hour: bool,
}

impl OrderEvidence {
    pub(crate) fn observe(&mut self, f1: u32, f2: u32, twelve_hour: bool) {
        if f1 > 12 && f2 <= 12 {
            self.day_first += 1;
        } else if f2 > 12 && f1 <= 12 {
            self.month_first += 1;
        }
        self.twelve_hour |= twelve_hour;
    }

    /// Picks the order with more evidence. Without any, 12-hour exports
    /// are read month-first (US) and all others day-first.
    pub(crate) fn decide(self) -> DateOrder {
        if self.day_first > self.month_first {
            DateOrder::DayFirst
        } else if self.month_first > self.day_first {
            DateOrder::MonthFirst
        } else if self.twelve_hour {
            DateOrder::MonthFirst
        } else {
            DateOrder::DayFirst
        }
    }
}

impl DateOrder {
    /// Returns all accepted names.
    pub fn all_names() -> &'static [&'static str] {
        &["auto", "day-first", "month-first", "dmy", "mdy"]
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::Auto => write!(f, "auto"),
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

impl FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DateOrder::Auto),
            "day-first" | "dmy" => Ok(DateOrder::DayFirst),
            "month-first" | "mdy" => Ok(DateOrder::MonthFirst),
            _ => Err(format!(
                "Unknown date order: '{}'. Expected one of: {}",
                s,
                DateOrder::all_names().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn parse(pattern: DatePattern, line: &str, order: DateOrder) -> Option<NaiveDateTime> {
        let re = Regex::new(pattern.pattern()).unwrap();
        let caps = re.captures(line)?;
        pattern.timestamp(&caps, order)
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_bracketed_slash_us() {
        let ts = parse(
            DatePattern::BracketedSlash,
            "[1/15/24, 10:30:45 PM] Alice: Hello",
            DateOrder::MonthFirst,
        );
        assert_eq!(ts, Some(dt(2024, 1, 15, 22, 30, 45)));
    }

    #[test]
    fn test_bracketed_dot() {
        let ts = parse(
            DatePattern::BracketedDot,
            "[15.01.24, 10:30:45] Alice: Hello",
            DateOrder::Auto,
        );
        assert_eq!(ts, Some(dt(2024, 1, 15, 10, 30, 45)));
    }

    #[test]
    fn test_dash_slash_day_first() {
        let ts = parse(
            DatePattern::DashSlash,
            "25/12/2023, 10:30 - John: Hello everyone!",
            DateOrder::DayFirst,
        );
        assert_eq!(ts, Some(dt(2023, 12, 25, 10, 30, 0)));
    }

    #[test]
    fn test_dash_slash_twelve_hour_narrow_space() {
        let ts = parse(
            DatePattern::DashSlash,
            "12/25/23, 12:05\u{202f}am - John: late",
            DateOrder::MonthFirst,
        );
        assert_eq!(ts, Some(dt(2023, 12, 25, 0, 5, 0)));
    }

    #[test]
    fn test_dash_dot_and_iso() {
        assert_eq!(
            parse(DatePattern::DashDot, "26.10.2025, 20:40 - A: B", DateOrder::Auto),
            Some(dt(2025, 10, 26, 20, 40, 0))
        );
        assert_eq!(
            parse(DatePattern::DashIso, "2024-01-15, 09:05 - A: B", DateOrder::Auto),
            Some(dt(2024, 1, 15, 9, 5, 0))
        );
    }

    #[test]
    fn test_impossible_dates_rejected() {
        assert_eq!(
            parse(DatePattern::DashSlash, "31/02/23, 10:00 - A: B", DateOrder::DayFirst),
            None
        );
        assert_eq!(
            parse(DatePattern::DashSlash, "1/1/23, 25:00 - A: B", DateOrder::DayFirst),
            None
        );
        assert_eq!(
            parse(DatePattern::DashSlash, "1/1/23, 13:00 PM - A: B", DateOrder::MonthFirst),
            None
        );
    }

    #[test]
    fn test_to_24_hour() {
        assert_eq!(to_24_hour(12, Some("A")), Some(0));
        assert_eq!(to_24_hour(12, Some("p")), Some(12));
        assert_eq!(to_24_hour(1, Some("P")), Some(13));
        assert_eq!(to_24_hour(0, Some("a")), None);
        assert_eq!(to_24_hour(23, None), Some(23));
        assert_eq!(to_24_hour(24, None), None);
    }

    #[test]
    fn test_order_evidence() {
        let mut evidence = OrderEvidence::default();
        evidence.observe(25, 12, false);
        evidence.observe(1, 1, false);
        assert_eq!(evidence.decide(), DateOrder::DayFirst);

        let mut evidence = OrderEvidence::default();
        evidence.observe(1, 15, true);
        assert_eq!(evidence.decide(), DateOrder::MonthFirst);

        let mut evidence = OrderEvidence::default();
        evidence.observe(1, 2, true);
        assert_eq!(evidence.decide(), DateOrder::MonthFirst);

        assert_eq!(OrderEvidence::default().decide(), DateOrder::DayFirst);
    }

    #[test]
    fn test_date_order_from_str() {
        assert_eq!("auto".parse::<DateOrder>().unwrap(), DateOrder::Auto);
        assert_eq!("DMY".parse::<DateOrder>().unwrap(), DateOrder::DayFirst);
        assert_eq!("month-first".parse::<DateOrder>().unwrap(), DateOrder::MonthFirst);
        assert!("sideways".parse::<DateOrder>().is_err());
    }

    #[test]
    fn test_all_patterns_compile() {
        for pattern in DatePattern::all() {
            assert!(Regex::new(pattern.pattern()).is_ok(), "{pattern}");
        }
    }
}
