//! tenderdiff Text Extractor
//!
//! Converts the raw bytes of an uploaded document into plain text.
//!
//! # Overview
//!
//! Extraction dispatches on the declared [`DocumentFormat`]; there is one
//! strategy per format and no content sniffing:
//!
//! | Format          | Strategy                                                |
//! |-----------------|---------------------------------------------------------|
//! | plain text      | Strict UTF-8 decode                                     |
//! | PDF             | Page texts in page order, no separator (`lopdf`)        |
//! | word processor  | Body paragraphs joined by newlines (`zip` + `quick-xml`) |
//! | spreadsheet     | One `Sheet: <name>` block per sheet (`calamine`)        |
//! | delimited text  | CSV rows, fields tab-joined (`csv`)                     |
//!
//! # Example Usage
//!
//! ```
//! use tenderdiff_extract::{extract, ExtractError};
//!
//! let text = extract(b"a,b\nc,d", "csv").unwrap();
//! assert_eq!(text, "a\tb\nc\td");
//!
//! assert!(matches!(extract(b"", "pptx"), Err(ExtractError::UnsupportedFormat(_))));
//! ```

#![warn(missing_docs)]

mod delimited;
mod docx;
mod error;
mod pdf;
mod spreadsheet;

pub use error::ExtractError;

use tenderdiff_domain::{DocumentFormat, ExtractedDocument, RawDocument};
use tracing::info;

/// Extract text from `bytes` declared with a format `tag` (e.g. `"pdf"`).
///
/// Fails with [`ExtractError::UnsupportedFormat`] for any unknown tag,
/// whatever the input.
pub fn extract(bytes: &[u8], tag: &str) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_tag(tag)
        .ok_or_else(|| ExtractError::UnsupportedFormat(tag.to_string()))?;
    extract_format(bytes, format)
}

/// Extract text from `bytes` with an already-resolved format.
pub fn extract_format(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::PlainText => Ok(String::from_utf8(bytes.to_vec())?),
        DocumentFormat::Pdf => pdf::extract_pdf(bytes),
        DocumentFormat::WordProcessor => docx::extract_docx(bytes),
        DocumentFormat::Spreadsheet => spreadsheet::extract_spreadsheet(bytes),
        DocumentFormat::DelimitedText => delimited::extract_csv(bytes),
    }
}

/// Extract a raw document, consuming its bytes.
pub fn extract_document(document: RawDocument) -> Result<ExtractedDocument, ExtractError> {
    let text = extract_format(&document.bytes, document.format)?;

    info!(
        "Extracted '{}' ({}): {} bytes -> {} chars",
        document.name,
        document.format.label(),
        document.bytes.len(),
        text.chars().count()
    );

    Ok(ExtractedDocument::new(document.name, document.format, text))
}
