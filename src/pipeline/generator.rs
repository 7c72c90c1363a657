/*!
 * Generation client adapter.
 *
 * Wraps the provider behind a uniform `generate(system, user, temperature)`
 * contract so the orchestrator stays independent of transport details, and
 * so tests can substitute a mock generator.
 */

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::app_config::Config;
use crate::errors::ProviderError;
use crate::providers::openai::{OpenAI, OpenAIRequest};
use crate::providers::Provider;

/// A text generation capability the pipeline can call.
///
/// Implementations are stateless from the caller's point of view: every
/// invocation is a fresh call, identical inputs are never deduplicated.
#[async_trait]
pub trait Generator: Send + Sync + Debug {
    /// Generate text from a system instruction, a user instruction and a
    /// sampling temperature.
    async fn generate(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, ProviderError>;
}

/// OpenAI-backed generation client.
#[derive(Debug)]
pub struct GenerationClient {
    client: OpenAI,
    model: String,
    max_tokens: u32,
}

impl GenerationClient {
    /// Create a generation client from the application configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: OpenAI::with_timeout(
                config.api_key.clone(),
                config.endpoint.clone(),
                Duration::from_secs(config.timeout_secs),
            ),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// The model identifier this client sends requests for.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Generator for GenerationClient {
    async fn generate(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        debug!(
            "Sending generation request (model: {}, temperature: {:.2}, user prompt: {} chars)",
            self.model,
            temperature,
            user.chars().count()
        );

        let request = OpenAIRequest::new(&self.model)
            .add_message("system", system)
            .add_message("user", user)
            .temperature(temperature)
            .max_tokens(self.max_tokens);

        let response = self.client.complete(request).await?;
        Ok(OpenAI::extract_text(&response))
    }
}
