//! Word-processor (docx) text extraction
//!
//! A docx file is a zip archive; the body lives in `word/document.xml`.
//! Only top-level body paragraphs are emitted, so text inside tables is
//! skipped.

use crate::error::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tenderdiff_domain::DocumentFormat;
use tracing::debug;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph texts in document order, one newline between paragraphs.
pub(crate) fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::failure(DocumentFormat::WordProcessor, e))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::failure(DocumentFormat::WordProcessor, e))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::failure(DocumentFormat::WordProcessor, e))?;

    let paragraphs = body_paragraphs(&xml)?;
    debug!("docx has {} body paragraphs", paragraphs.len());

    Ok(paragraphs.join("\n"))
}

/// Walk `document.xml` and collect the text of each body paragraph.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut paragraph_depth = 0usize;
    let mut table_depth = 0usize;
    let mut in_properties = false;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::failure(DocumentFormat::WordProcessor, e))?;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" => {
                    if paragraph_depth == 0 {
                        current.clear();
                    }
                    paragraph_depth += 1;
                }
                b"w:pPr" => in_properties = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" => {
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                    if paragraph_depth == 0 && table_depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"w:pPr" => in_properties = false,
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if paragraph_depth == 0 && table_depth == 0 => {
                    paragraphs.push(String::new());
                }
                b"w:tab" if paragraph_depth > 0 && !in_properties => current.push('\t'),
                b"w:br" | b"w:cr" if paragraph_depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text && paragraph_depth > 0 => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::failure(DocumentFormat::WordProcessor, e))?;
                current.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
