//! Error types for puzzle generation and its file and output plumbing

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum WordGridError {
    /// Grid dimensions cannot host a puzzle
    ///
    /// Raised for zero or oversized dimensions, and by
    /// [`ensure_fits`](crate::io::dimensions::ensure_fits) when the longest
    /// word cannot be laid out in either axis.
    InvalidDimensions {
        /// Requested grid width
        width: usize,
        /// Requested grid height
        height: usize,
        /// Explanation of why the dimensions are unusable
        reason: String,
    },

    /// Word cannot be written into the grid
    InvalidWord {
        /// The offending word as supplied
        word: String,
        /// Explanation of what's wrong with the word
        reason: String,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing the rendered puzzle failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WordGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {width}x{height}: {reason}")
            }
            Self::InvalidWord { word, reason } => {
                write!(f, "Invalid word '{word}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Output { source } => {
                write!(f, "Failed to write puzzle output: {source}")
            }
        }
    }
}

impl std::error::Error for WordGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, WordGridError>;

impl From<std::io::Error> for WordGridError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WordGridError {
    WordGridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimensions error
pub fn invalid_dimensions(width: usize, height: usize, reason: &impl ToString) -> WordGridError {
    WordGridError::InvalidDimensions {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create an invalid word error
pub fn invalid_word(word: &str, reason: &impl ToString) -> WordGridError {
    WordGridError::InvalidWord {
        word: word.to_string(),
        reason: reason.to_string(),
    }
}
