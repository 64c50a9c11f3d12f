//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local LLM API.
//!
//! # Features
//!
//! - Async HTTP communication with the `/api/generate` endpoint
//! - Configurable endpoint; the model is chosen per call
//! - One request per call: no retries, no client timeout, no streaming
//!
//! # Examples
//!
//! ```no_run
//! use tenderdiff_llm::OllamaProvider;
//! use tenderdiff_domain::LlmProvider;
//!
//! # async fn example() -> Result<(), tenderdiff_llm::LlmError> {
//! let provider = OllamaProvider::default_endpoint();
//! let text = provider.generate("mistral", "Say hello").await?;
//! # Ok(())
//! # }
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use tenderdiff_domain::LlmProvider;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "mistral";

/// Ollama API provider for local LLM inference
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    endpoint: String,
    client: reqwest::Client,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    /// Create a new Ollama provider at `http://localhost:11434`
    pub fn default_endpoint() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Configured API endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model,
            prompt,
            stream: false,
        };

        debug!("POST {} (model {}, {} prompt chars)", url, model, prompt.chars().count());

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(model.to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, body)));
        }

        let parsed: OllamaGenerateResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(parsed.response)
    }
}

impl Default for OllamaProvider {
    fn default() -> Self {
        Self::default_endpoint()
    }
}

impl LlmProvider for OllamaProvider {
    type Error = LlmError;

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, Self::Error> {
        self.request(model, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_provider_creation() {
        let provider = OllamaProvider::new("http://localhost:11434/");
        assert_eq!(provider.endpoint(), "http://localhost:11434");
    }

    #[test]
    fn test_ollama_provider_default_endpoint() {
        let provider = OllamaProvider::default_endpoint();
        assert_eq!(provider.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_request_body_is_non_streaming() {
        let body = serde_json::to_value(OllamaGenerateRequest {
            model: "mistral",
            prompt: "hi",
            stream: false,
        })
        .unwrap();
        assert_eq!(body["model"], "mistral");
        assert_eq!(body["prompt"], "hi");
        assert_eq!(body["stream"], false);
    }

    // Integration test (requires running Ollama)
    #[tokio::test]
    #[ignore] // Only run when Ollama is available
    async fn test_ollama_generate_integration() {
        let provider = OllamaProvider::default_endpoint();
        let result = provider.generate(DEFAULT_MODEL, "Say 'hello' and nothing else").await;

        if let Ok(response) = result {
            assert!(!response.is_empty());
        }
    }

    #[tokio::test]
    async fn test_ollama_error_handling() {
        // Port 9 (discard) is not an Ollama server
        let provider = OllamaProvider::new("http://127.0.0.1:9");

        let result = provider.generate(DEFAULT_MODEL, "test").await;

        match result {
            Err(LlmError::Communication(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }
}
