//! PDF text extraction

use crate::error::ExtractError;
use lopdf::Document;
use tenderdiff_domain::DocumentFormat;
use tracing::debug;

/// Concatenate the text of every page, in page order, with no separator.
///
/// A page whose content cannot be decoded contributes nothing; only a file
/// that cannot be parsed at all is an error.
pub(crate) fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let document = Document::load_mem(bytes)
        .map_err(|e| ExtractError::failure(DocumentFormat::Pdf, e))?;

    let pages = document.get_pages();
    debug!("PDF has {} pages", pages.len());

    let mut text = String::new();
    for page_number in pages.keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => debug!("Skipping page {}: {}", page_number, e),
        }
    }

    Ok(text)
}
