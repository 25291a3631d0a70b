//! Configuration types for parsing, analysis and export.
//!
//! These structs carry no CLI framework dependencies; the binary builds them
//! from its arguments, library users build them directly.
//!
//! - [`ParserConfig`] - date order and media placeholder
//! - [`AnalysisConfig`] - top-N, stop words and emoji set
//! - [`ExportConfig`] - delimiter and optional date-part columns
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ParserConfig};
//! use chatlens::parsing::DateOrder;
//!
//! let parser = ParserConfig::new().with_date_order(DateOrder::MonthFirst);
//! let analysis = AnalysisConfig::new().with_top_n(10);
//!
//! assert_eq!(parser.date_order, DateOrder::MonthFirst);
//! assert_eq!(analysis.top_n, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::DateOrder;
use crate::record::DEFAULT_MEDIA_PLACEHOLDER;
use crate::resources::{EmojiSet, StopWords};

/// Default number of rows in the word and user rankings.
pub const DEFAULT_TOP_N: usize = 20;

/// Configuration for [`ExportParser`](crate::parser::ExportParser).
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_media_placeholder("<Médias omis>");
/// assert_eq!(config.media_placeholder, "<Médias omis>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Day/month order of slash dates (default: auto)
    pub date_order: DateOrder,

    /// Text the export writes in place of attachments (default: `<Media omitted>`)
    pub media_placeholder: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::Auto,
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day/month order of slash dates.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets the media placeholder.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }
}

/// Configuration for [`Report`](crate::core::report::Report).
///
/// Holds the two static resources the aggregations consume. The bundled
/// defaults are used unless replaced. Keep `media_placeholder` in sync with
/// [`ParserConfig::media_placeholder`].
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Rows kept in the word and user rankings (default: 20)
    pub top_n: usize,

    /// Words excluded from the word ranking
    pub stop_words: StopWords,

    /// Emoji counted by the emoji table
    pub emoji: EmojiSet,

    /// Placeholder whose tokens never count as words (default: `<Media omitted>`)
    pub media_placeholder: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            stop_words: StopWords::default(),
            emoji: EmojiSet::default(),
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with the bundled resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ranking length. Zero is raised to one.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n.max(1);
        self
    }

    /// Replaces the stop-word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Replaces the emoji set.
    #[must_use]
    pub fn with_emoji(mut self, emoji: EmojiSet) -> Self {
        self.emoji = emoji;
        self
    }

    /// Sets the media placeholder excluded from the word ranking.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }
}

/// Configuration for flat record exports.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ExportConfig;
///
/// let config = ExportConfig::new()
///     .with_delimiter(b';')
///     .with_date_parts();
///
/// assert_eq!(config.delimiter, b';');
/// assert!(config.include_date_parts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// CSV field delimiter (default: `,`)
    pub delimiter: u8,

    /// Add `date`, `year`, `month_num`, `month`, `day`, `day_name`,
    /// `hour`, `minute` and `period` columns (default: false)
    pub include_date_parts: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_date_parts: false,
        }
    }
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CSV delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables the date-part columns.
    #[must_use]
    pub fn with_date_parts(mut self) -> Self {
        self.include_date_parts = true;
        self
    }
}
