//! Unified error types for chatlens.
//!
//! Every fallible operation in the crate returns [`ChatlensError`]. Parsing
//! failures abort the whole pipeline; aggregations never fail, so the enum
//! only describes input, resource and output problems.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export has no recognizable message boundary before its content.
    ///
    /// The first non-blank line of an export must start with one of the
    /// accepted date/time prefixes. The engine never guesses a format.
    #[error(
        "Malformed export{}: line {line} does not start a message: {preview:?}",
        path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default()
    )]
    MalformedExport {
        /// 1-based line number of the offending line
        line: usize,
        /// The beginning of the offending line
        preview: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// Input bytes are not valid UTF-8.
    #[error("UTF-8 decoding error in {context}: {source}")]
    Decoding {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// An unknown output format or file extension was requested.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A stop-word list or emoji set could not be used.
    #[error("Invalid {resource}: {message}")]
    InvalidResource {
        /// Which resource was being loaded
        resource: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::str::Utf8Error> for ChatlensError {
    fn from(err: std::str::Utf8Error) -> Self {
        ChatlensError::Decoding {
            context: "export content".to_string(),
            source: err,
        }
    }
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Decoding {
            context: "output conversion".to_string(),
            source: err.utf8_error(),
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

/// Longest line prefix kept in [`ChatlensError::MalformedExport`].
const PREVIEW_CHARS: usize = 60;

impl ChatlensError {
    /// Creates a malformed export error for the given 1-based line.
    pub fn malformed_export(line: usize, text: &str, path: Option<PathBuf>) -> Self {
        ChatlensError::MalformedExport {
            line,
            preview: text.chars().take(PREVIEW_CHARS).collect(),
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid resource error.
    pub fn invalid_resource(resource: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidResource {
            resource,
            message: message.into(),
        }
    }

    /// Attaches a file path to a [`MalformedExport`](ChatlensError::MalformedExport) error.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatlensError::MalformedExport { line, preview, .. } => {
                ChatlensError::MalformedExport {
                    line,
                    preview,
                    path: Some(file.into()),
                }
            }
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the export had no valid message boundary.
    pub fn is_malformed_export(&self) -> bool {
        matches!(self, ChatlensError::MalformedExport { .. })
    }

    /// Returns `true` if the input was not valid UTF-8.
    pub fn is_decoding(&self) -> bool {
        matches!(self, ChatlensError::Decoding { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}
