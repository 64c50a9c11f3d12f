//! Documents before and after extraction

use crate::DocumentFormat;

/// An uploaded document that has not been extracted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Display name (usually the file name)
    pub name: String,

    /// Declared format
    pub format: DocumentFormat,

    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl RawDocument {
    /// Create a new raw document
    pub fn new(name: impl Into<String>, format: DocumentFormat, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            format,
            bytes,
        }
    }
}

/// A document whose plain text has been extracted
///
/// Immutable once built; the raw bytes are dropped at extraction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    name: String,
    format: DocumentFormat,
    text: String,
}

impl ExtractedDocument {
    /// Create an extracted document
    pub fn new(name: impl Into<String>, format: DocumentFormat, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format,
            text: text.into(),
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format the text was extracted from
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Full extracted text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the extracted text in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
