//! Inference client: a single round trip that never fails outward

use std::fmt::Display;
use std::time::Instant;
use tenderdiff_domain::{LlmProvider, ModelResponse};
use tracing::{debug, warn};

/// Wraps an [`LlmProvider`] and turns every provider failure into
/// [`ModelResponse::Unavailable`].
///
/// Callers branch on the returned variant; nothing is retried.
#[derive(Debug, Clone)]
pub struct InferenceClient<P> {
    provider: P,
}

impl<P> InferenceClient<P>
where
    P: LlmProvider,
    P::Error: Display,
{
    /// Create a client around a provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Send one prompt to `model` and return its response.
    pub async fn infer(&self, prompt: &str, model: &str) -> ModelResponse {
        let started = Instant::now();

        match self.provider.generate(model, prompt).await {
            Ok(text) => {
                debug!(
                    "Model '{}' answered {} chars in {} ms",
                    model,
                    text.chars().count(),
                    started.elapsed().as_millis()
                );
                ModelResponse::Generated(text)
            }
            Err(e) => {
                warn!("Inference with model '{}' failed: {}", model, e);
                ModelResponse::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}
