//! AWS Bedrock client - HIPAA-eligible, no training-data retention
//!
//! Calls the Bedrock runtime invoke endpoint directly over HTTPS with a
//! Bedrock API key. Request and response bodies follow the Nova
//! `messages-v1` schema.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::{GenerationConfig, ReasoningProviderConfig};
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::providers::ReasoningClient;

pub struct BedrockClient {
    http: Client,
    region: String,
    api_key: String,
    model_id: String,
}

impl BedrockClient {
    pub fn new(config: &ReasoningProviderConfig) -> OrchestratorResult<Self> {
        let ReasoningProviderConfig::Bedrock {
            region,
            api_key,
            model_id,
        } = config
        else {
            return Err(OrchestratorError::Config(
                "Bedrock client requires a bedrock provider configuration".to_string(),
            ));
        };

        let http = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            http,
            region: region.clone(),
            api_key: api_key.clone(),
            model_id: model_id.clone(),
        })
    }

    fn invoke_url(&self) -> String {
        format!(
            "https://bedrock-runtime.{}.amazonaws.com/model/{}/invoke",
            self.region, self.model_id
        )
    }
}

#[async_trait]
impl ReasoningClient for BedrockClient {
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        generation: &GenerationConfig,
    ) -> OrchestratorResult<String> {
        let body = json!({
            "schemaVersion": "messages-v1",
            "messages": [
                {
                    "role": "user",
                    "content": [{ "text": prompt }]
                }
            ],
            "system": [{ "text": system }],
            "inferenceConfig": {
                "maxTokens": generation.max_tokens,
                "temperature": generation.temperature,
                "topP": generation.top_p,
                "topK": generation.top_k
            }
        });

        let response = self
            .http
            .post(self.invoke_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                OrchestratorError::ReasoningUnavailable(format!("Bedrock request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrchestratorError::ReasoningUnavailable(format!(
                "Bedrock returned HTTP {status}"
            )));
        }

        let value: Value = response.json().await.map_err(|e| {
            OrchestratorError::ReasoningUnavailable(format!(
                "Bedrock response body unreadable: {e}"
            ))
        })?;

        value
            .pointer("/output/message/content/0/text")
            .and_then(Value::as_str)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| {
                OrchestratorError::ReasoningUnavailable(
                    "Bedrock response missing output text".to_string(),
                )
            })
    }
}
