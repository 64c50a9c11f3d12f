//! Error types for text extraction

use tenderdiff_domain::DocumentFormat;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Tag or extension does not name a supported format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Bytes are not valid UTF-8
    #[error("Decode error: {0}")]
    Decode(String),

    /// The parsing library rejected the document content
    #[error("Failed to extract {format} document: {reason}")]
    ExtractionFailure {
        /// Format the document was declared as
        format: DocumentFormat,
        /// Error reported by the parser
        reason: String,
    },
}

impl ExtractError {
    pub(crate) fn failure(format: DocumentFormat, reason: impl ToString) -> Self {
        ExtractError::ExtractionFailure {
            format,
            reason: reason.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for ExtractError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        ExtractError::Decode(e.to_string())
    }
}

impl From<std::str::Utf8Error> for ExtractError {
    fn from(e: std::str::Utf8Error) -> Self {
        ExtractError::Decode(e.to_string())
    }
}
