//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::prompt::PromptBuilder;
use std::fmt::Display;
use std::path::Path;
use std::time::Instant;
use tenderdiff_domain::{
    AnalysisResult, DocumentFormat, ExtractedDocument, LlmProvider, ModelResponse, RawDocument,
};
use tenderdiff_extract::{extract_document, ExtractError};
use tenderdiff_llm::InferenceClient;
use tracing::{debug, info};

/// Both extracted documents and the analysis built from them
#[derive(Debug, Clone)]
pub struct ComparisonRun {
    /// First document
    pub document1: ExtractedDocument,
    /// Second document
    pub document2: ExtractedDocument,
    /// Summaries and comparison
    pub result: AnalysisResult,
}

/// The Analyzer runs extraction, summarization, comparison and question answering
pub struct Analyzer<P> {
    client: InferenceClient<P>,
    prompts: PromptBuilder,
    config: AnalyzerConfig,
}

impl<P> Analyzer<P>
where
    P: LlmProvider,
    P::Error: Display,
{
    /// Create a new Analyzer, rejecting an invalid configuration
    pub fn new(provider: P, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;

        Ok(Self {
            client: InferenceClient::new(provider),
            prompts: PromptBuilder::new(config.templates),
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Read a document from disk, taking its format from the file extension.
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<RawDocument, AnalyzerError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AnalyzerError::NotFound(path.to_path_buf()));
        }

        let format = DocumentFormat::from_path(path).ok_or_else(|| {
            let tag = path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default();
            ExtractError::UnsupportedFormat(tag)
        })?;

        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!("Loaded '{}' ({} bytes, {})", name, bytes.len(), format.label());
        Ok(RawDocument::new(name, format, bytes))
    }

    /// Extract the plain text of a raw document
    pub fn extract(&self, document: RawDocument) -> Result<ExtractedDocument, AnalyzerError> {
        Ok(extract_document(document)?)
    }

    /// Summarize one document from its truncated text
    pub async fn summarize(&self, document: &ExtractedDocument) -> ModelResponse {
        let prompt = self
            .prompts
            .summarize(document.text(), self.config.summary_char_budget);

        info!("Summarizing '{}'", document.name());
        debug!("Summary prompt length: {} chars", prompt.chars().count());

        self.client.infer(&prompt, &self.config.model).await
    }

    /// Compare two documents from their full texts.
    ///
    /// The comparison never reads the summaries, so it can be issued on its own.
    pub async fn compare(
        &self,
        document1: &ExtractedDocument,
        document2: &ExtractedDocument,
    ) -> ModelResponse {
        let prompt = self.prompts.compare(document1.text(), document2.text());

        info!("Comparing '{}' with '{}'", document1.name(), document2.name());
        debug!("Comparison prompt length: {} chars", prompt.chars().count());

        self.client.infer(&prompt, &self.config.model).await
    }

    /// Summarize both documents concurrently, then compare them
    pub async fn analyze(
        &self,
        document1: &ExtractedDocument,
        document2: &ExtractedDocument,
    ) -> AnalysisResult {
        let started = Instant::now();

        let (summary1, summary2) =
            tokio::join!(self.summarize(document1), self.summarize(document2));
        let comparison = self.compare(document1, document2).await;

        let result = AnalysisResult {
            summary1,
            summary2,
            comparison,
        };

        info!(
            "Analysis complete in {} ms ({} of 3 stages unavailable)",
            started.elapsed().as_millis(),
            result.failed_stages()
        );

        result
    }

    /// Answer a free-text question from one document's truncated text
    pub async fn answer(&self, document: &ExtractedDocument, question: &str) -> ModelResponse {
        let prompt = self
            .prompts
            .answer(document.text(), question, self.config.answer_char_budget);

        info!("Answering question about '{}'", document.name());

        self.client.infer(&prompt, &self.config.model).await
    }

    /// Load, extract and analyze two files.
    ///
    /// Both paths are checked before anything is extracted; any load or
    /// extraction error aborts the run.
    pub async fn run(
        &self,
        path1: impl AsRef<Path>,
        path2: impl AsRef<Path>,
    ) -> Result<ComparisonRun, AnalyzerError> {
        let raw1 = self.load(path1).await?;
        let raw2 = self.load(path2).await?;

        let document1 = self.extract(raw1)?;
        let document2 = self.extract(raw2)?;

        let result = self.analyze(&document1, &document2).await;

        Ok(ComparisonRun {
            document1,
            document2,
            result,
        })
    }
}
