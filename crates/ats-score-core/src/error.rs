//! Error types for ats-score-core.
//!
//! The scoring engine itself is total and has no error type. Everything
//! here belongs to the collaborators around it: configuration loading and
//! turning an input document into plain text.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while turning a document into scorable text.
///
/// Callers can tell "nothing to analyze" apart from "analysis ran and
/// found issues": a report is only produced once extraction succeeds.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document format has no text extractor here.
    #[error("unsupported file type: {extension}. Use PDF, DOCX, plain text or markdown")]
    UnsupportedFormat {
        /// The file extension that was rejected (empty when there was none).
        extension: String,
    },

    /// Too little text came out of the document, usually a scanned PDF.
    #[error(
        "could not extract enough text ({chars} chars, need {min}). The file might be image-based"
    )]
    EmptyOrImageOnly {
        /// Characters of trimmed text that were extracted.
        chars: usize,
        /// Minimum number of characters required.
        min: usize,
    },

    /// The document bytes could not be decoded or parsed.
    #[error("corrupt file: {0}")]
    CorruptFile(String),
}

/// Result type alias using [`ExtractionError`].
pub type ExtractionResult<T> = Result<T, ExtractionError>;
