//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use tenderdiff_llm::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Default summarization truncation budget (characters)
pub const DEFAULT_SUMMARY_CHAR_BUDGET: usize = 5_000;

/// Default question-answering truncation budget (characters)
pub const DEFAULT_ANSWER_CHAR_BUDGET: usize = 10_000;

/// Family of summary and comparison instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSet {
    /// Tender-specific extraction and four-category tabular comparison
    #[default]
    Tender,
    /// Generic "summarize the following document" prompts
    Plain,
}

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Ollama API endpoint
    pub endpoint: String,

    /// Model used for every inference call
    pub model: String,

    /// Characters of document text included in a summarization prompt
    pub summary_char_budget: usize,

    /// Characters of document text included in a question-answering prompt
    pub answer_char_budget: usize,

    /// Prompt template family
    pub templates: TemplateSet,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.summary_char_budget == 0 {
            return Err("summary_char_budget must be greater than 0".to_string());
        }
        if self.answer_char_budget == 0 {
            return Err("answer_char_budget must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            summary_char_budget: DEFAULT_SUMMARY_CHAR_BUDGET,
            answer_char_budget: DEFAULT_ANSWER_CHAR_BUDGET,
            templates: TemplateSet::Tender,
        }
    }
}
