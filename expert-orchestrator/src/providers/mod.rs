pub mod bedrock;
pub mod ollama;

use async_trait::async_trait;

use crate::config::{GenerationConfig, ReasoningProviderConfig};
use crate::error::OrchestratorResult;

/// Trait for reasoning-model providers
///
/// A single opaque boundary: implementations surface every underlying
/// failure (network, quota, malformed request) as
/// [`crate::error::OrchestratorError::ReasoningUnavailable`] and perform no
/// retries of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReasoningClient: Send + Sync {
    /// Generate raw text for a rendered prompt
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        generation: &GenerationConfig,
    ) -> OrchestratorResult<String>;
}

/// Create a reasoning client based on configuration
pub fn create_client(
    config: &ReasoningProviderConfig,
) -> OrchestratorResult<Box<dyn ReasoningClient>> {
    match config {
        ReasoningProviderConfig::Bedrock { .. } => {
            Ok(Box::new(bedrock::BedrockClient::new(config)?))
        }
        ReasoningProviderConfig::Ollama { .. } => {
            Ok(Box::new(ollama::OllamaClient::new(config)?))
        }
    }
}
