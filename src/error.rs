//! Error types for the docstract library.
//!
//! Every failure of a parse invocation maps onto exactly one of these
//! variants; the library never produces partial output alongside an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docstract operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that terminate a parse invocation.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The source path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source exists but is not a valid .docx container.
    #[error("not a valid .docx file: {} ({reason})", .path.display())]
    InvalidFormat { path: PathBuf, reason: String },

    /// Malformed or unexpected internal structure encountered mid-parse.
    #[error("failed to parse {file}: {message}")]
    ParseFailure { file: String, message: String },
}

impl ParseError {
    pub(crate) fn parse_failure(file: impl Into<String>, message: impl ToString) -> Self {
        ParseError::ParseFailure {
            file: file.into(),
            message: message.to_string(),
        }
    }
}
