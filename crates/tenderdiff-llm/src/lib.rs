//! tenderdiff LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `tenderdiff-domain`, plus
//! the [`InferenceClient`] that callers go through.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use tenderdiff_llm::{InferenceClient, MockProvider};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let client = InferenceClient::new(MockProvider::new("Hello from LLM!"));
//! let response = client.infer("test prompt", "mistral").await;
//! assert_eq!(response.text(), "Hello from LLM!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod ollama;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tenderdiff_domain::LlmProvider;
use thiserror::Error;

pub use client::InferenceClient;
pub use ollama::{OllamaProvider, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error (service unreachable)
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

/// One recorded call to a [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Model name passed to `generate`
    pub model: String,
    /// Prompt passed to `generate`
    pub prompt: String,
}

#[derive(Debug, Clone)]
enum MockBehavior {
    Fixed(String),
    EchoLength,
    Fail(String),
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network
/// calls, and records every call it receives.
///
/// # Examples
///
/// ```
/// use tenderdiff_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    behavior: MockBehavior,
    responses: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockProvider {
    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fixed(response.into()))
    }

    /// Create a MockProvider that answers with the prompt's character count
    pub fn echo_length() -> Self {
        Self::with_behavior(MockBehavior::EchoLength)
    }

    /// Create a MockProvider that fails every call, as an unreachable service would
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fail(reason.into()))
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), response.into());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Every call received so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Reset the recorded calls
    pub fn reset_calls(&self) {
        lock(&self.calls).clear();
    }

    fn respond(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        lock(&self.calls).push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });

        let overridden = lock(&self.responses).get(prompt).cloned();

        match (&self.behavior, overridden) {
            (MockBehavior::Fail(reason), _) => Err(LlmError::Communication(reason.clone())),
            (_, Some(response)) => Ok(response),
            (MockBehavior::Fixed(response), None) => Ok(response.clone()),
            (MockBehavior::EchoLength, None) => {
                Ok(format!("prompt length: {}", prompt.chars().count()))
            }
        }
    }
}

// Poisoned locks still hold a valid call log.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, Self::Error> {
        self.respond(model, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("mistral", "any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("m", "hello").await.unwrap(), "world");
        assert_eq!(provider.generate("m", "foo").await.unwrap(), "bar");
        assert_eq!(provider.generate("m", "unknown").await.unwrap(), "Default mock response");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.generate("m", "prompt1").await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate("m", "prompt2").await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_calls();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_echo_length() {
        let provider = MockProvider::echo_length();
        assert_eq!(provider.generate("m", "héllo").await.unwrap(), "prompt length: 5");
    }

    #[tokio::test]
    async fn test_mock_provider_failing() {
        let provider = MockProvider::failing("down");
        let result = provider.generate("m", "p").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_calls() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("m", "test").await.unwrap();

        // Both should share the same call log due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
