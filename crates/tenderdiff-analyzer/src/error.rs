//! Error types for the Analyzer

use std::path::PathBuf;
use tenderdiff_extract::ExtractError;
use thiserror::Error;

/// Errors that abort a pipeline run
///
/// Inference failures are not errors here; they come back as
/// `ModelResponse::Unavailable` inside the result.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Input path does not exist
    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading an input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text extraction failed
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
