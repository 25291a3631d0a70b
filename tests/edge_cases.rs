//! Edge case tests for chatlens
//!
//! Boundary conditions of the parser and the aggregations that the
//! per-module unit tests do not reach.

use chatlens::config::ParserConfig;
use chatlens::prelude::*;

fn parse(content: &str) -> Vec<MessageRecord> {
    ExportParser::new().parse_str(content).unwrap()
}

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_senders_and_bodies() {
    let records = parse(
        "1/1/23, 10:00 - Иван: Привет мир!\n\
         1/1/23, 10:01 - 田中太郎: こんにちは世界！\n\
         1/1/23, 10:02 - محمد: مرحبا بالعالم\n\
         1/1/23, 10:03 - User 🎉: Hello 👋 World 🌍",
    );
    let names: Vec<_> = records.iter().filter_map(|r| r.sender().name()).collect();
    assert_eq!(names, vec!["Иван", "田中太郎", "محمد", "User 🎉"]);
    assert_eq!(records[0].body(), "Привет мир!");
    assert_eq!(records[3].word_count(), 4);
}

#[test]
fn test_cyrillic_words_are_counted() {
    let records = parse("1/1/23, 10:00 - A: Привет привет ПРИВЕТ");
    let words = most_common_words(&records, &StopWords::empty(), "<Media omitted>", 10);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "привет");
    assert_eq!(words[0].count, 3);
}

#[test]
fn test_phone_number_sender() {
    let records = parse("1/1/23, 10:00 - +1 555 0100: call me");
    assert_eq!(records[0].sender(), &Sender::user("+1 555 0100"));
}

#[test]
fn test_colon_in_body_stays_in_body() {
    let records = parse("1/1/23, 10:00 - Alice: note: meeting at 10:30");
    assert_eq!(records[0].sender(), &Sender::user("Alice"));
    assert_eq!(records[0].body(), "note: meeting at 10:30");
}

#[test]
fn test_system_notice_with_quotes() {
    let records = parse("1/1/23, 10:00 - Bob changed the subject from \"a\" to \"b\"");
    assert!(records[0].is_system());
    assert_eq!(records[0].sender().label(), "group_notification");
}

// =========================================================================
// Continuation lines
// =========================================================================

#[test]
fn test_blank_lines_inside_message() {
    let records = parse("1/1/23, 10:00 - Alice: first\n\nthird\n\n1/1/23, 10:01 - Bob: next");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].body(), "first\n\nthird");
}

#[test]
fn test_line_that_looks_almost_like_a_header() {
    let records = parse(
        "1/1/23, 10:00 - Alice: list\n\
         1/1/23 10:00 Bob: missing comma\n\
         99/99/23, 10:00 - Carol: impossible date",
    );
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].body(),
        "list\n1/1/23 10:00 Bob: missing comma\n99/99/23, 10:00 - Carol: impossible date"
    );
}

#[test]
fn test_continuation_of_system_event() {
    let records = parse("1/1/23, 10:00 - Alice added Bob\nand Carol");
    assert_eq!(records.len(), 1);
    assert!(records[0].is_system());
    assert_eq!(records[0].body(), "Alice added Bob\nand Carol");
}

#[test]
fn test_empty_body_message() {
    let records = parse("1/1/23, 10:00 - Alice: \n1/1/23, 10:01 - Bob: hi");
    assert_eq!(records[0].body(), "");
    assert_eq!(records[0].word_count(), 0);
}

#[test]
fn test_media_placeholder_on_continuation_line() {
    let records = parse("1/1/23, 10:00 - Alice: look\n<Media omitted>");
    assert!(records[0].has_media());
    assert_eq!(records[0].word_count(), 3);
}

// =========================================================================
// Date and time boundaries
// =========================================================================

#[test]
fn test_midnight_and_noon_twelve_hour() {
    let records = parse("[1/2/24, 12:00:00 AM] A: midnight\n[1/2/24, 12:00:00 PM] A: noon");
    assert_eq!(records[0].hour(), 0);
    assert_eq!(records[1].hour(), 12);
    assert_eq!(records[0].period(), "00-01");
}

#[test]
fn test_two_digit_and_four_digit_years() {
    let records = parse("1/1/23, 10:00 - A: x\n01/01/2023, 10:00 - A: y");
    assert_eq!(records[0].year(), 2023);
    assert_eq!(records[0].timestamp(), records[1].timestamp());
}

#[test]
fn test_leap_day() {
    let records = parse("29/02/2024, 10:00 - A: leap");
    assert_eq!((records[0].month(), records[0].day()), (2, 29));
}

#[test]
fn test_ambiguous_dates_follow_configuration() {
    let content = "03/04/2023, 10:00 - A: x";
    let day_first = parse(content);
    assert_eq!((day_first[0].month(), day_first[0].day()), (4, 3));

    let month_first = ExportParser::with_config(
        ParserConfig::new().with_date_order(DateOrder::MonthFirst),
    )
    .parse_str(content)
    .unwrap();
    assert_eq!((month_first[0].month(), month_first[0].day()), (3, 4));
}

#[test]
fn test_monthly_timeline_spans_years_in_order() {
    let records = parse(
        "15/12/2022, 10:00 - A: x\n\
         15/01/2023, 10:00 - A: y\n\
         15/12/2023, 10:00 - A: z",
    );
    let labels: Vec<_> = monthly_timeline(&records)
        .into_iter()
        .map(|r| r.label)
        .collect();
    assert_eq!(labels, vec!["December-2022", "January-2023", "December-2023"]);

    let months = month_activity(&records);
    assert_eq!(months[11].count, 2);
}

// =========================================================================
// Aggregation boundaries
// =========================================================================

#[test]
fn test_all_aggregations_on_empty_input() {
    let records: Vec<MessageRecord> = Vec::new();
    assert_eq!(fetch_stats(&records), ScalarStats::default());
    assert!(monthly_timeline(&records).is_empty());
    assert!(daily_timeline(&records).is_empty());
    assert!(week_activity(&records).iter().all(|r| r.count == 0));
    assert!(month_activity(&records).iter().all(|r| r.count == 0));
    assert_eq!(activity_heatmap(&records).max(), 0);
    assert!(most_active_users(&records).is_empty());
    assert!(emoji_frequency(&records, &EmojiSet::default()).is_empty());
}

#[test]
fn test_only_system_events() {
    let records = parse("1/1/23, 10:00 - Alice created group \"x\"\n1/1/23, 10:01 - Alice added Bob");
    assert_eq!(fetch_stats(&records).total_messages, 2);
    assert!(most_active_users(&records).is_empty());
    assert!(senders(&records).is_empty());

    let config = AnalysisConfig::default();
    let report = Report::build(&records, &Selector::Overall, &config);
    assert!(report.words.is_empty());
    assert_eq!(report.users, Some(Vec::new()));
}

#[test]
fn test_sender_selector_is_exact() {
    let records = parse("1/1/23, 10:00 - Alice: x\n1/1/23, 10:01 - alice: y");
    assert_eq!(select(&records, &Selector::sender("Alice")).len(), 1);
    assert_eq!(select(&records, &Selector::sender("ALICE")).len(), 0);
}

#[test]
fn test_overall_selector_parsing() {
    assert_eq!(Selector::parse("Overall"), Selector::Overall);
    assert_eq!(Selector::parse("overall"), Selector::Overall);
    assert_eq!(Selector::parse("Bob"), Selector::sender("Bob"));
}

#[test]
fn test_percentages_sum_to_about_hundred() {
    let records = parse(
        "1/1/23, 10:00 - A: x\n1/1/23, 10:00 - B: x\n1/1/23, 10:00 - C: x",
    );
    let ranking = most_active_users(&records);
    let sum: f64 = ranking.iter().map(|r| r.percentage).sum();
    assert!((sum - 100.0).abs() < 0.05, "{sum}");
    assert!((ranking[0].percentage - 33.33).abs() < 1e-9);
}

#[test]
fn test_emoji_ties_keep_first_appearance() {
    let records = parse("1/1/23, 10:00 - A: 👍 🎉\n1/1/23, 10:01 - B: 🎉 👍");
    let emoji = emoji_frequency(&records, &EmojiSet::default());
    let order: Vec<_> = emoji.iter().map(|e| e.emoji.as_str()).collect();
    assert_eq!(order, vec!["👍", "🎉"]);
}

#[test]
fn test_words_ties_are_lexicographic() {
    let records = parse("1/1/23, 10:00 - A: zebra apple mango");
    let words = most_common_words(&records, &StopWords::empty(), "<Media omitted>", 2);
    let order: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(order, vec!["apple", "mango"]);
}

#[test]
fn test_zero_top_n_is_raised_to_one() {
    let config = AnalysisConfig::default().with_top_n(0);
    assert_eq!(config.top_n, 1);
}
