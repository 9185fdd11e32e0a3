//! Error types for the playconv library.
//!
//! Conversion failures on individual playlist lines are not errors: they
//! surface as [`ConversionOutcome::Unresolvable`](crate::ConversionOutcome)
//! and the line is dropped. The types here cover the failures that stop a
//! whole playlist or the whole invocation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a playconv error.
///
/// # Examples
///
/// ```
/// use playconv::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the playconv library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An unknown path format identifier was supplied.
    #[error("unknown path format '{value}' (expected posix, windows, uri-posix or uri-windows)")]
    InvalidFormat {
        /// The rejected identifier.
        value: String,
    },

    /// Invocation parameters contradict each other.
    #[error("mismatched arguments: {details}")]
    MismatchedArguments {
        /// What did not line up.
        details: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use playconv::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent.m3u") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathNotFound { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/list.m3u"),
            reason: "not valid UTF-8".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/list.m3u"));
        assert!(display.contains("not valid UTF-8"));
    }

    #[test]
    fn test_path_not_found_error() {
        let err = Error::PathNotFound {
            path: PathBuf::from("missing.m3u"),
        };
        assert!(format!("{err}").contains("path not found"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_not_found_counts_as_not_found() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_not_found());

        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no").into();
        assert!(!err.is_not_found());
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_invalid_format_error() {
        let err = Error::InvalidFormat {
            value: "hfs".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("'hfs'"));
        assert!(display.contains("uri-windows"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "types".to_string(),
            message: "must not be empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("types"));
    }

    #[test]
    fn test_mismatched_arguments_error() {
        let err = Error::MismatchedArguments {
            details: "2 file names for 3 paths".to_string(),
        };
        assert!(format!("{err}").contains("2 file names for 3 paths"));
    }
}
