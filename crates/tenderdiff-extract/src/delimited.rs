//! Delimited-text (CSV) extraction
//!
//! Blank lines are dropped rather than kept as empty rows, so `a,b\n\nc,d`
//! yields two rows. Quoted fields may span lines.

use crate::error::ExtractError;
use csv::ReaderBuilder;
use tenderdiff_domain::DocumentFormat;

/// Parse comma-delimited rows and re-join fields with tabs, rows with newlines.
pub(crate) fn extract_csv(bytes: &[u8]) -> Result<String, ExtractError> {
    let content = std::str::from_utf8(bytes)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::failure(DocumentFormat::DelimitedText, e))?;
        rows.push(record.iter().collect::<Vec<_>>().join("\t"));
    }

    Ok(rows.join("\n"))
}
