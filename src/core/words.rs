//! Word frequency.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;
use crate::resources::StopWords;

/// One row of the word ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Splits text into normalized word tokens.
///
/// Tokens are whitespace-separated, lowercased, and stripped of leading and
/// trailing characters that are not letters or digits. Tokens that are
/// nothing but punctuation disappear.
///
/// ```
/// use chatlens::core::words::tokenize;
///
/// let tokens: Vec<String> = tokenize("Hello, WORLD!! ... it's 2pm").collect();
/// assert_eq!(tokens, vec!["hello", "world", "it's", "2pm"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Returns the `top_n` most frequent words of user messages.
///
/// Stop words and the tokens of `media_placeholder` are excluded. System
/// events are skipped. Ties are broken lexicographically.
pub fn most_common_words(
    records: &[MessageRecord],
    stop_words: &StopWords,
    media_placeholder: &str,
    top_n: usize,
) -> Vec<WordFrequency> {
    let placeholder: Vec<String> = tokenize(media_placeholder).collect();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records.iter().filter(|r| !r.is_system()) {
        for token in tokenize(record.body()) {
            if stop_words.contains(&token) || placeholder.contains(&token) {
                continue;
            }
            *counts.entry(token).or_default() += 1;
        }
    }

    let mut ranking: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranking.truncate(top_n);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ExportParser;
    use crate::record::DEFAULT_MEDIA_PLACEHOLDER;

    fn parse(content: &str) -> Vec<MessageRecord> {
        ExportParser::new().parse_str(content).unwrap()
    }

    fn words(ranking: &[WordFrequency]) -> Vec<(&str, usize)> {
        ranking.iter().map(|w| (w.word.as_str(), w.count)).collect()
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens: Vec<String> = tokenize("¡Hola! (test) -- x...").collect();
        assert_eq!(tokens, vec!["hola", "test", "x"]);
        assert_eq!(tokenize("   ").count(), 0);
    }

    #[test]
    fn test_most_common_words_ranking() {
        let records = parse(
            "1/1/23, 10:00 - A: pizza Pizza tonight\n\
             1/1/23, 10:01 - B: pizza? movie tonight!\n\
             1/1/23, 10:02 - C: apple",
        );
        let ranking = most_common_words(&records, &StopWords::empty(), DEFAULT_MEDIA_PLACEHOLDER, 3);
        assert_eq!(
            words(&ranking),
            vec![("pizza", 3), ("tonight", 2), ("apple", 1)]
        );
    }

    #[test]
    fn test_stop_words_and_placeholder_excluded() {
        let records = parse(
            "1/1/23, 10:00 - A: the cat and the dog\n\
             1/1/23, 10:01 - B: <Media omitted>",
        );
        let stop = StopWords::from_words(["the", "and"]);
        let ranking = most_common_words(&records, &stop, DEFAULT_MEDIA_PLACEHOLDER, 20);
        assert_eq!(words(&ranking), vec![("cat", 1), ("dog", 1)]);
    }

    #[test]
    fn test_system_records_skipped() {
        let records = parse(
            "1/1/23, 10:00 - A: hello\n\
             1/1/23, 10:10 - Alice added Bob",
        );
        let ranking = most_common_words(&records, &StopWords::empty(), DEFAULT_MEDIA_PLACEHOLDER, 20);
        assert_eq!(words(&ranking), vec![("hello", 1)]);
    }

    #[test]
    fn test_empty_records() {
        assert!(most_common_words(&[], &StopWords::default(), DEFAULT_MEDIA_PLACEHOLDER, 20).is_empty());
    }
}
