//! Error types for OMM Core

use thiserror::Error;

/// Result type alias using OmmError
pub type Result<T> = std::result::Result<T, OmmError>;

/// Top-level error type for all OMM operations
#[derive(Debug, Error)]
pub enum OmmError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Chapter error: {0}")]
    Chapter(#[from] ChapterError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while parsing chapter text
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{token}' is not a chapter number")]
    ConversionFailure { token: String },

    #[error("range ends {low} and {high} have different depths")]
    DifferentDepth { low: String, high: String },

    #[error("range {low} ~ {high} spans more than its last component")]
    MultiSection { low: String, high: String },
}

/// Errors that occur while editing a list of chapters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChapterError {
    #[error("cannot remove {pivot} from {container}: depths differ")]
    DepthMismatch { pivot: String, container: String },
}
