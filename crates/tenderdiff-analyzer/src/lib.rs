//! tenderdiff Analyzer
//!
//! Turns two documents into summaries, a comparison and on-demand answers
//! using a local LLM.
//!
//! # Overview
//!
//! The Analyzer is a strictly one-way pipeline:
//!
//! ```text
//! bytes → Extractor → text → PromptBuilder → prompt → InferenceClient → ModelResponse
//! ```
//!
//! # Stages
//!
//! 1. **Extraction**: both documents, independently; errors abort the run
//! 2. **Summaries**: one call per document, issued concurrently, over the
//!    first `summary_char_budget` characters
//! 3. **Comparison**: one call over both full, untruncated texts (never the
//!    summaries)
//! 4. **Questions**: on demand, over the first `answer_char_budget` characters
//!    of the chosen document
//!
//! Inference failures do not abort anything: they come back as
//! `ModelResponse::Unavailable` in the affected field.
//!
//! # Example Usage
//!
//! ```no_run
//! use tenderdiff_analyzer::{Analyzer, AnalyzerConfig};
//! use tenderdiff_llm::OllamaProvider;
//!
//! # async fn example() -> Result<(), tenderdiff_analyzer::AnalyzerError> {
//! let config = AnalyzerConfig::default();
//! let provider = OllamaProvider::new(config.endpoint.clone());
//! let analyzer = Analyzer::new(provider, config)?;
//!
//! let run = analyzer.run("tender_a.pdf", "tender_b.docx").await?;
//! println!("{}", run.result.comparison);
//!
//! let answer = analyzer.answer(&run.document1, "What is the bid security?").await;
//! println!("{}", answer);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod prompt;

pub use analyzer::{Analyzer, ComparisonRun};
pub use config::{
    AnalyzerConfig, TemplateSet, DEFAULT_ANSWER_CHAR_BUDGET, DEFAULT_SUMMARY_CHAR_BUDGET,
};
pub use error::AnalyzerError;
pub use prompt::PromptBuilder;
