//! Ollama client - fully private, self-hosted reasoning
//!
//! Talks to a local Ollama instance over its HTTP API; no patient data
//! leaves the deployment.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::{GenerationConfig, ReasoningProviderConfig};
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::providers::ReasoningClient;

pub struct OllamaClient {
    http: Client,
    api_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &ReasoningProviderConfig) -> OrchestratorResult<Self> {
        let ReasoningProviderConfig::Ollama { api_url, model } = config else {
            return Err(OrchestratorError::Config(
                "Ollama client requires an ollama provider configuration".to_string(),
            ));
        };

        let http = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            model: model.clone(),
        })
    }
}

#[async_trait]
impl ReasoningClient for OllamaClient {
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        generation: &GenerationConfig,
    ) -> OrchestratorResult<String> {
        let body = json!({
            "model": self.model,
            "system": system,
            "prompt": prompt,
            "stream": false,
            "options": {
                "num_predict": generation.max_tokens,
                "temperature": generation.temperature,
                "top_p": generation.top_p,
                "top_k": generation.top_k
            }
        });

        let response = self
            .http
            .post(format!("{}/api/generate", self.api_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                OrchestratorError::ReasoningUnavailable(format!("Ollama request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrchestratorError::ReasoningUnavailable(format!(
                "Ollama returned HTTP {status}"
            )));
        }

        let value: Value = response.json().await.map_err(|e| {
            OrchestratorError::ReasoningUnavailable(format!(
                "Ollama response body unreadable: {e}"
            ))
        })?;

        value
            .get("response")
            .and_then(Value::as_str)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| {
                OrchestratorError::ReasoningUnavailable(
                    "Ollama response missing response text".to_string(),
                )
            })
    }
}
