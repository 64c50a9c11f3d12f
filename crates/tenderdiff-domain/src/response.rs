//! Model responses and analysis results

use std::fmt;

/// Text rendered in place of model output when inference failed
pub const INFERENCE_UNAVAILABLE: &str =
    "[Model not found or unreachable. Make sure Ollama is running and the model is pulled.]";

/// Outcome of a single inference call
///
/// A failed call is never an error at this level: it is carried as
/// [`ModelResponse::Unavailable`] so that a pipeline run can still finish
/// and report the failure next to whatever did succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelResponse {
    /// Text generated by the model
    Generated(String),

    /// The inference service could not produce a response
    Unavailable {
        /// Underlying failure, for logs and verbose output
        reason: String,
    },
}

impl ModelResponse {
    /// Text to display: the generated text, or [`INFERENCE_UNAVAILABLE`]
    pub fn text(&self) -> &str {
        match self {
            ModelResponse::Generated(text) => text,
            ModelResponse::Unavailable { .. } => INFERENCE_UNAVAILABLE,
        }
    }

    /// Whether the model produced output
    pub fn is_generated(&self) -> bool {
        matches!(self, ModelResponse::Generated(_))
    }

    /// Failure reason, if the call failed
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            ModelResponse::Generated(_) => None,
            ModelResponse::Unavailable { reason } => Some(reason),
        }
    }
}

impl fmt::Display for ModelResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Result of one orchestration run over two documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Summary of the first document
    pub summary1: ModelResponse,

    /// Summary of the second document
    pub summary2: ModelResponse,

    /// Comparison of both documents
    pub comparison: ModelResponse,
}

impl AnalysisResult {
    /// Number of stages whose inference call failed
    pub fn failed_stages(&self) -> usize {
        [&self.summary1, &self.summary2, &self.comparison]
            .iter()
            .filter(|r| !r.is_generated())
            .count()
    }
}
