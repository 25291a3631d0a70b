//! Static resources consumed by the aggregations: stop words and emoji.
//!
//! Both resources are plain text files with one entry per line. Blank lines
//! and lines starting with `#` are ignored. A default copy of each ships
//! inside the binary; callers can load their own with `from_file`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ChatlensError;

const BUNDLED_STOP_WORDS: &str = include_str!("../resources/stop_words.txt");
const BUNDLED_EMOJI: &str = include_str!("../resources/emoji.txt");

/// Yields the meaningful lines of a resource file.
fn entries(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Words excluded from word-frequency tables.
///
/// Entries are stored lowercased, so lookups are case-insensitive as long
/// as the probe is lowercased too (which [`tokenize`](crate::core::words::tokenize) does).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// A stop-word set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Parses a newline-separated stop-word list.
    pub fn parse(text: &str) -> Self {
        Self {
            words: entries(text).map(str::to_lowercase).collect(),
        }
    }

    /// Loads a newline-separated stop-word list from a file.
    pub fn from_file(path: &Path) -> Result<Self, ChatlensError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Builds a set from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Returns `true` if `word` (already lowercased) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for StopWords {
    /// The bundled English list plus common chat fillers.
    fn default() -> Self {
        Self::parse(BUNDLED_STOP_WORDS)
    }
}

/// The set of emoji counted by [`emoji_frequency`](crate::core::emoji::emoji_frequency).
///
/// Matching is leftmost-longest: at any position the longest emoji of the
/// set wins, so `"❤️"` (heart + variation selector) is one match even when
/// the bare `"❤"` is also in the set.
#[derive(Debug, Clone)]
pub struct EmojiSet {
    emojis: Vec<String>,
    matcher: Option<Regex>,
}

impl EmojiSet {
    /// An emoji set that matches nothing.
    pub fn empty() -> Self {
        Self {
            emojis: Vec::new(),
            matcher: None,
        }
    }

    /// Builds a set from an iterator of emoji strings.
    pub fn from_emojis<I, S>(emojis: I) -> Result<Self, ChatlensError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut emojis: Vec<String> = emojis
            .into_iter()
            .map(Into::into)
            .filter(|e| !e.is_empty() && seen.insert(e.clone()))
            .collect();

        if emojis.is_empty() {
            return Ok(Self::empty());
        }

        // Longer alternatives first: the regex engine takes the first
        // alternative that matches at a position.
        emojis.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let pattern = emojis
            .iter()
            .map(|e| regex::escape(e))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&pattern)
            .map_err(|e| ChatlensError::invalid_resource("emoji set", e.to_string()))?;

        Ok(Self {
            emojis,
            matcher: Some(matcher),
        })
    }

    /// Parses a newline-separated emoji list.
    pub fn parse(text: &str) -> Result<Self, ChatlensError> {
        Self::from_emojis(entries(text))
    }

    /// Loads a newline-separated emoji list from a file.
    pub fn from_file(path: &Path) -> Result<Self, ChatlensError> {
        let content = fs::read_to_string(path)?;
        let set = Self::parse(&content)?;
        if set.is_empty() {
            return Err(ChatlensError::invalid_resource(
                "emoji set",
                format!("{} contains no emoji", path.display()),
            ));
        }
        Ok(set)
    }

    /// Returns `true` if `candidate` is exactly one emoji of the set.
    pub fn contains(&self, candidate: &str) -> bool {
        self.emojis.iter().any(|e| e == candidate)
    }

    /// Iterates over the emoji of the set found in `text`, in order.
    pub fn find_iter<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.matcher
            .iter()
            .flat_map(move |re| re.find_iter(text).map(|m| m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

impl Default for EmojiSet {
    /// The bundled set: emoticons, pictographs, transport, supplemental
    /// symbols, common dingbats, a handful of ZWJ sequences and flags.
    fn default() -> Self {
        Self::parse(BUNDLED_EMOJI).unwrap_or_else(|_| Self::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_stop_words_parse_skips_comments() {
        let words = StopWords::parse("# comment\nThe\n\n  and  \n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("the"));
        assert!(words.contains("and"));
        assert!(!words.contains("# comment"));
    }

    #[test]
    fn test_bundled_stop_words() {
        let words = StopWords::default();
        assert!(words.contains("the"));
        assert!(words.contains("you"));
        assert!(!words.contains("pizza"));
    }

    #[test]
    fn test_stop_words_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hello\nWORLD").unwrap();
        let words = StopWords::from_file(file.path()).unwrap();
        assert!(words.contains("world"));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_stop_words_missing_file() {
        let err = StopWords::from_file(Path::new("/nonexistent/stop.txt")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_emoji_longest_match_wins() {
        let set = EmojiSet::from_emojis(["❤", "❤\u{fe0f}", "😂"]).unwrap();
        let found: Vec<&str> = set.find_iter("a ❤\u{fe0f} b ❤ 😂😂").collect();
        assert_eq!(found, vec!["❤\u{fe0f}", "❤", "😂", "😂"]);
    }

    #[test]
    fn test_emoji_zwj_sequence_is_one_match() {
        let family = "👨\u{200d}👩\u{200d}👧";
        let set = EmojiSet::from_emojis(["👨", "👩", "👧", family]).unwrap();
        let found: Vec<&str> = set.find_iter(family).collect();
        assert_eq!(found, vec![family]);
    }

    #[test]
    fn test_emoji_empty_set_matches_nothing() {
        let set = EmojiSet::empty();
        assert_eq!(set.find_iter("😂").count(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_emoji_duplicates_removed() {
        let set = EmojiSet::from_emojis(["😂", "😂", ""]).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("😂"));
    }

    #[test]
    fn test_bundled_emoji() {
        let set = EmojiSet::default();
        assert!(set.len() > 1000);
        assert!(set.contains("😂"));
        assert!(set.contains("🔥"));
        assert!(set.contains("❤\u{fe0f}"));
        assert!(!set.contains("a"));
    }

    #[test]
    fn test_emoji_from_empty_file_is_error() {
        let file = NamedTempFile::new().unwrap();
        let err = EmojiSet::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ChatlensError::InvalidResource { .. }));
    }
}
