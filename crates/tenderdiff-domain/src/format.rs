//! Document format tags

use std::fmt;
use std::path::Path;

/// Supported document formats
///
/// The format is always declared by the caller (an upload tag or a file
/// extension). Content is never sniffed, so a mismatched tag is handed to
/// the wrong extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// UTF-8 plain text
    PlainText,

    /// Portable Document Format
    Pdf,

    /// Office Open XML word-processor document (docx)
    WordProcessor,

    /// Spreadsheet workbook (xlsx, xls, ods)
    Spreadsheet,

    /// Comma-delimited text
    DelimitedText,
}

impl DocumentFormat {
    /// All formats, in display order
    pub const ALL: [DocumentFormat; 5] = [
        DocumentFormat::PlainText,
        DocumentFormat::Pdf,
        DocumentFormat::WordProcessor,
        DocumentFormat::Spreadsheet,
        DocumentFormat::DelimitedText,
    ];

    /// Get the canonical tag for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "txt",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::WordProcessor => "docx",
            DocumentFormat::Spreadsheet => "xlsx",
            DocumentFormat::DelimitedText => "csv",
        }
    }

    /// Resolve a format tag or file extension.
    ///
    /// Matching is case-insensitive and ignores a leading dot, so `".PDF"`
    /// and `"pdf"` both resolve to [`DocumentFormat::Pdf`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().trim_start_matches('.');
        match tag.to_lowercase().as_str() {
            "txt" | "text" => Some(DocumentFormat::PlainText),
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::WordProcessor),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(DocumentFormat::Spreadsheet),
            "csv" => Some(DocumentFormat::DelimitedText),
            _ => None,
        }
    }

    /// Resolve the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_tag)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "plain text",
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::WordProcessor => "word processor",
            DocumentFormat::Spreadsheet => "spreadsheet",
            DocumentFormat::DelimitedText => "delimited text",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tags_round_trip() {
        for format in DocumentFormat::ALL {
            assert_eq!(DocumentFormat::from_tag(format.as_str()), Some(format));
        }
    }

    #[test]
    fn test_tag_normalization() {
        assert_eq!(DocumentFormat::from_tag(".PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_tag(" Docx "), Some(DocumentFormat::WordProcessor));
        assert_eq!(DocumentFormat::from_tag("xls"), Some(DocumentFormat::Spreadsheet));
        assert_eq!(DocumentFormat::from_tag("text"), Some(DocumentFormat::PlainText));
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(DocumentFormat::from_tag("doc"), None);
        assert_eq!(DocumentFormat::from_tag("pptx"), None);
        assert_eq!(DocumentFormat::from_tag(""), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("/tmp/tender.Final.csv")),
            Some(DocumentFormat::DelimitedText)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("README")), None);
    }
}
