//! Command-line interface definition using clap, and the text dashboard.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] / [`DateOrderArg`] - value enums mapped onto the
//!   library's [`format::OutputFormat`](crate::format::OutputFormat) and
//!   [`DateOrder`]
//! - [`render_dashboard`] - the report as plain text
//!
//! # Rendering a dashboard
//!
//! ```rust
//! use chatlens::cli::render_dashboard;
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::{Report, Selector};
//! use chatlens::parser::ExportParser;
//!
//! let records = ExportParser::new().parse_str("1/1/23, 10:00 - Alice: Hi").unwrap();
//! let report = Report::build(&records, &Selector::Overall, &AnalysisConfig::default());
//!
//! let mut out = Vec::new();
//! render_dashboard(&report, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Total Messages"));
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TOP_N;
use crate::core::{LabeledCount, Report};
use crate::parsing::DateOrder;
use crate::record::DEFAULT_MEDIA_PLACEHOLDER;

/// Statistics for WhatsApp group-chat exports: activity timelines,
/// the most active members, common words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice --top 10
    chatlens chat.txt --list-users
    chatlens chat.txt --export messages.csv --date-parts
    chatlens chat.txt --export messages.jsonl --summary summary.csv
    chatlens chat.txt --report report.json --date-order month-first")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Show statistics for one participant ("Overall" for everyone)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Rows in the user and word rankings
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Stop-word list, one word per line (default: bundled English list)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Emoji set, one emoji per line (default: bundled set)
    #[arg(long, value_name = "FILE")]
    pub emoji: Option<PathBuf>,

    /// Text the export writes in place of attachments
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_MEDIA_PLACEHOLDER)]
    pub media_placeholder: String,

    /// Day/month order of slash dates
    #[arg(long, value_enum, default_value = "auto")]
    pub date_order: DateOrderArg,

    /// Write the parsed message table to this file
    #[arg(short = 'o', long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Format of --export (default: from the file extension)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Add date, year, month, day, hour, minute and period columns to --export
    #[arg(long)]
    pub date_parts: bool,

    /// Write the headline counts as a Metric,Value CSV
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    /// Write every table of the dashboard as JSON
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// List the participants and exit
    #[arg(long)]
    pub list_users: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options for `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated table
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Values of `--date-order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum DateOrderArg {
    /// Infer from the export
    #[default]
    Auto,

    /// D/M/Y
    #[value(alias = "dmy")]
    DayFirst,

    /// M/D/Y
    #[value(alias = "mdy")]
    MonthFirst,
}

impl From<DateOrderArg> for DateOrder {
    fn from(order: DateOrderArg) -> DateOrder {
        match order {
            DateOrderArg::Auto => DateOrder::Auto,
            DateOrderArg::DayFirst => DateOrder::DayFirst,
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
        }
    }
}

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const BAR_WIDTH: usize = 30;

/// Writes every table of `report` as text.
pub fn render_dashboard(report: &Report, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "📊 Statistics for {}", report.selector)?;
    writeln!(out, "{RULE}")?;
    for (metric, value) in report.stats.rows() {
        writeln!(out, "   {metric:<16} {value}")?;
    }

    section(out, "📅 Monthly Timeline")?;
    bars(out, &report.monthly_timeline)?;

    section(out, "📆 Daily Timeline")?;
    bars(out, &report.daily_timeline)?;

    section(out, "🗓️  Most Busy Day")?;
    bars(out, &report.week_activity)?;

    section(out, "🌙 Most Busy Month")?;
    bars(out, &report.month_activity)?;

    section(out, "🔥 Weekly Activity Map")?;
    heatmap(out, report)?;

    if let Some(users) = &report.users {
        section(out, "👥 Most Active Users")?;
        if users.is_empty() {
            writeln!(out, "   (none)")?;
        }
        for rank in users {
            writeln!(
                out,
                "   {:<20} {:>6}  {:>6.2}%",
                rank.sender, rank.count, rank.percentage
            )?;
        }
    }

    section(out, "💬 Most Common Words")?;
    if report.words.is_empty() {
        writeln!(out, "   (none)")?;
    }
    for word in &report.words {
        writeln!(out, "   {:<20} {:>6}", word.word, word.count)?;
    }

    section(out, "😀 Emoji")?;
    if report.emoji.is_empty() {
        writeln!(out, "   (none)")?;
    }
    for emoji in &report.emoji {
        writeln!(out, "   {}  {:>6}", emoji.emoji, emoji.count)?;
    }

    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")
}

fn bars(out: &mut impl Write, rows: &[LabeledCount]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "   (none)");
    }
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0).max(1);
    for row in rows {
        let width = row.count * BAR_WIDTH / max;
        writeln!(
            out,
            "   {:<16} {:>6} {}",
            row.label,
            row.count,
            "█".repeat(width)
        )?;
    }
    Ok(())
}

fn heatmap(out: &mut impl Write, report: &Report) -> io::Result<()> {
    const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

    let map = &report.heatmap;
    let max = map.max().max(1);

    write!(out, "   {:<10}", "")?;
    for hour in 0..map.column_labels().len() {
        write!(out, "{}", hour % 10)?;
    }
    writeln!(out)?;

    for (label, row) in map.row_labels().iter().zip(map.cells()) {
        write!(out, "   {label:<10}")?;
        for &count in row {
            let shade = if count == 0 {
                0
            } else {
                1 + (count - 1) * (SHADES.len() - 1) / max
            };
            write!(out, "{}", SHADES[shade])?;
        }
        writeln!(out)?;
    }
    Ok(())
}
