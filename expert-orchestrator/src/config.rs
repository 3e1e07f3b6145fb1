use serde::{Deserialize, Serialize};

use crate::error::{OrchestratorError, OrchestratorResult};

/// Provider-specific configuration for the reasoning model
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReasoningProviderConfig {
    /// AWS Bedrock (HIPAA-eligible, customer data NOT used for training)
    Bedrock {
        region: String,
        api_key: String,
        model_id: String, // e.g. "us.amazon.nova-micro-v1:0"
    },
    /// Ollama local models (fully private, self-hosted)
    Ollama {
        api_url: String,
        model: String,
    },
}

/// Generation parameters passed through to the reasoning model
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationConfig {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.7,
            top_p: 0.9,
            top_k: 20,
        }
    }
}

/// Expert-selection orchestrator configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrchestratorConfig {
    pub provider: ReasoningProviderConfig,
    pub generation: GenerationConfig,
    /// Upper bound on a single reasoning call; a timeout is treated the
    /// same as any other invocation failure.
    pub request_timeout_ms: u64,
}

impl OrchestratorConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::Config`] when `REASONING_PROVIDER`
    /// names an unknown provider.
    pub fn from_env() -> OrchestratorResult<Self> {
        let request_timeout_ms = std::env::var("REASONING_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30_000);

        let generation = GenerationConfig {
            max_tokens: std::env::var("REASONING_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4000),
            temperature: std::env::var("REASONING_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.7),
            top_p: std::env::var("REASONING_TOP_P")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.9),
            top_k: std::env::var("REASONING_TOP_K")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
        };

        // Detect provider from environment
        let provider = if let Ok(provider_type) = std::env::var("REASONING_PROVIDER") {
            match provider_type.to_lowercase().as_str() {
                "bedrock" => Self::bedrock_from_env(),
                "ollama" => ReasoningProviderConfig::Ollama {
                    api_url: std::env::var("OLLAMA_API_URL")
                        .unwrap_or_else(|_| "http://localhost:11434".to_string()),
                    model: std::env::var("OLLAMA_MODEL")
                        .unwrap_or_else(|_| "llama3".to_string()),
                },
                _ => {
                    return Err(OrchestratorError::Config(format!(
                        "Unknown reasoning provider: {provider_type}"
                    )))
                }
            }
        } else {
            // Default to Bedrock, matching the deployed pipeline
            Self::bedrock_from_env()
        };

        Ok(Self {
            provider,
            generation,
            request_timeout_ms,
        })
    }

    fn bedrock_from_env() -> ReasoningProviderConfig {
        ReasoningProviderConfig::Bedrock {
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            api_key: std::env::var("BEDROCK_API_KEY").unwrap_or_default(),
            model_id: std::env::var("BEDROCK_MODEL_ID")
                .unwrap_or_else(|_| "us.amazon.nova-micro-v1:0".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults_match_deployed_inference_config() {
        let generation = GenerationConfig::default();
        assert_eq!(generation.max_tokens, 4000);
        assert!((generation.temperature - 0.7).abs() < f32::EPSILON);
        assert!((generation.top_p - 0.9).abs() < f32::EPSILON);
        assert_eq!(generation.top_k, 20);
    }

    #[test]
    fn test_provider_config_tagged_serde() {
        let json = r#"{"type": "ollama", "api_url": "http://localhost:11434", "model": "llama3"}"#;
        let provider: ReasoningProviderConfig = serde_json::from_str(json).unwrap();
        match provider {
            ReasoningProviderConfig::Ollama { model, .. } => assert_eq!(model, "llama3"),
            ReasoningProviderConfig::Bedrock { .. } => panic!("expected ollama provider"),
        }
    }
}
