//! Error types for the debtdrone library.
//!
//! Structured error variants that preserve context and keep the
//! propagation policy explicit: per-file and per-analyzer failures are
//! absorbed at the orchestrator boundary, only path-resolution errors
//! abort a run.

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Main result type for debtdrone operations.
pub type Result<T> = std::result::Result<T, DebtdroneError>;

/// Error type covering every failure mode of the analysis pipeline.
#[derive(Error, Debug)]
pub enum DebtdroneError {
    /// I/O related errors (file reads, stream writes)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Target path cannot be resolved or does not exist. Fatal.
    #[error("Failed to resolve path '{path}': {message}")]
    Resolution {
        /// The path that could not be resolved
        path: String,
        /// Error description
        message: String,
    },

    /// Parsing and language processing errors
    #[error("Parse error in {language}: {message}")]
    Parse {
        /// Language being parsed
        language: String,
        /// Error description
        message: String,
        /// File path where the error occurred
        file_path: Option<String>,
    },

    /// Analysis pipeline errors
    #[error("Pipeline error at stage '{stage}': {message}")]
    Pipeline {
        /// Pipeline stage where the error occurred
        stage: String,
        /// Error description
        message: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Unsupported language or file type
    #[error("Unsupported: {message}")]
    Unsupported {
        /// Error description
        message: String,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
    },
}

impl DebtdroneError {
    /// Create a new I/O error with context.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new resolution error for an unusable target path.
    pub fn resolution(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Resolution {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new parse error.
    pub fn parse(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: None,
        }
    }

    /// Create a new parse error carrying the offending file path.
    pub fn parse_in_file(
        language: impl Into<String>,
        message: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: Some(file_path.into()),
        }
    }

    /// Create a new pipeline error.
    pub fn pipeline(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pipeline {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a new unsupported error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error aborts the whole run. Only resolution errors
    /// are fatal; everything else is absorbed by the orchestrator.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }
}

impl From<io::Error> for DebtdroneError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for DebtdroneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<Utf8Error> for DebtdroneError {
    fn from(err: Utf8Error) -> Self {
        Self::parse("unknown", format!("UTF-8 encoding error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = DebtdroneError::parse("python", "syntax error");
        assert!(matches!(err, DebtdroneError::Parse { .. }));

        let err = DebtdroneError::pipeline("complexity", "walk aborted");
        assert!(matches!(err, DebtdroneError::Pipeline { .. }));
    }

    #[test]
    fn test_only_resolution_errors_are_fatal() {
        assert!(DebtdroneError::resolution("/missing", "no such directory").is_fatal());
        assert!(!DebtdroneError::parse("go", "bad token").is_fatal());
        assert!(!DebtdroneError::internal("oops").is_fatal());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: DebtdroneError = io_err.into();
        assert!(matches!(err, DebtdroneError::Io { .. }));
        assert!(err.to_string().contains("I/O"));
    }

    #[test]
    fn test_parse_error_display_includes_language() {
        let err = DebtdroneError::parse_in_file("ruby", "unbalanced end", "app/models/user.rb");
        assert!(err.to_string().contains("ruby"));
    }
}
