//! CLI-specific error types with exit codes.
//!
//! Library errors are wrapped here and mapped onto process exit codes.

use playconv::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., a path that does not convert) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (unresolvable path, skipped playlists)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::MismatchedArguments { .. } | LibError::InvalidFormat { .. } => 4,
                LibError::Io(_) => 5,
                LibError::Configuration(_) | LibError::Validation { .. } => 7,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::MismatchedArguments { details } => CliError::InvalidArguments(details),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(
            CliError::Io(std::io::Error::other("disk")).exit_code(),
            5
        );
        assert_eq!(
            CliError::Library(LibError::PathNotFound {
                path: PathBuf::from("/x")
            })
            .exit_code(),
            6
        );
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);
    }

    #[test]
    fn test_mismatched_arguments_become_invalid_arguments() {
        let err: CliError = LibError::MismatchedArguments {
            details: "2 paths for 3 types".into(),
        }
        .into();
        assert!(matches!(err, CliError::InvalidArguments(_)));
        assert_eq!(err.exit_code(), 4);
    }
}
