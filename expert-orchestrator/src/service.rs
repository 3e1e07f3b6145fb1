use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use error_common::{codes, log_error, ErrorContext, PipelineError};
use logger_redacted::redact_for_log;

use crate::care_plan::ExpertAnalysisRequest;
use crate::config::OrchestratorConfig;
use crate::decision::ExpertSelection;
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::prompt::{render_expert_prompt, SYSTEM_PROMPT};
use crate::providers::{create_client, ReasoningClient};
use crate::validator::normalize;

/// Expert-selection orchestrator for generated care plans
///
/// Stateless across invocations: each call renders a prompt, makes one
/// reasoning call, and normalizes the outcome. Concurrent calls share
/// nothing but the provider's HTTP connection pool.
pub struct ExpertOrchestrator {
    config: OrchestratorConfig,
    client: Box<dyn ReasoningClient>,
}

impl ExpertOrchestrator {
    /// Create an orchestrator with the provider named in the configuration
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::Config`] or a client construction error
    /// when the provider cannot be built.
    pub fn new(config: OrchestratorConfig) -> OrchestratorResult<Self> {
        let client = create_client(&config.provider)?;
        Ok(Self { config, client })
    }

    /// Create an orchestrator with an injected reasoning client
    pub fn with_client(config: OrchestratorConfig, client: Box<dyn ReasoningClient>) -> Self {
        Self { config, client }
    }

    /// Determine which experts should be consulted for a care plan.
    ///
    /// Always resolves to a `"success"` selection covering the full
    /// catalog; failed or unusable reasoning calls produce the all-false
    /// default map rather than an error.
    pub async fn determine_required_experts(
        &self,
        request: &ExpertAnalysisRequest,
    ) -> ExpertSelection {
        let visit_id = request.care_plan.visit_id.as_deref();
        info!(visit_id, "Analyzing expert needs for care plan");

        let prompt = render_expert_prompt(&request.care_plan);
        debug!(prompt_len = prompt.len(), "Rendered expert-evaluation prompt");

        let outcome = self.invoke_with_timeout(&prompt).await;
        match &outcome {
            Ok(raw) => debug!(response = %redact_for_log(raw), "Raw reasoning response"),
            Err(err) => {
                let context = ErrorContext {
                    visit_id: visit_id.map(str::to_string),
                    ..Default::default()
                };
                log_error(&context, &PipelineError::ReasoningError(err.to_string())).await;
            }
        }

        let required_experts = normalize(outcome);

        let needed: Vec<&str> = required_experts
            .iter()
            .filter(|(_, decision)| decision.needed)
            .map(|(id, _)| id.as_str())
            .collect();
        info!(visit_id, needed_experts = ?needed, "Expert selection complete");

        ExpertSelection::success(required_experts)
    }

    async fn invoke_with_timeout(&self, prompt: &str) -> OrchestratorResult<String> {
        let limit = Duration::from_millis(self.config.request_timeout_ms);
        let call = self
            .client
            .generate(SYSTEM_PROMPT, prompt, &self.config.generation);
        match timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    error_code = codes::reasoning::TIMEOUT,
                    timeout_ms = self.config.request_timeout_ms,
                    "Reasoning invocation timed out"
                );
                Err(OrchestratorError::ReasoningUnavailable(format!(
                    "reasoning call exceeded {}ms",
                    self.config.request_timeout_ms
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::expert_ids;
    use crate::config::{GenerationConfig, ReasoningProviderConfig};
    use crate::decision::default_decision_map;
    use crate::providers::MockReasoningClient;

    fn test_config() -> OrchestratorConfig {
        OrchestratorConfig {
            provider: ReasoningProviderConfig::Ollama {
                api_url: "http://localhost:11434".to_string(),
                model: "llama3".to_string(),
            },
            generation: GenerationConfig::default(),
            request_timeout_ms: 1_000,
        }
    }

    fn all_false_response() -> String {
        let entries: Vec<String> = expert_ids()
            .map(|id| format!(r#""{id}": {{"needed": false, "reasons": []}}"#))
            .collect();
        format!("{{{}}}", entries.join(","))
    }

    #[tokio::test]
    async fn test_valid_model_response_passes_through() {
        let response = all_false_response().replace(
            r#""kidney_expert": {"needed": false, "reasons": []}"#,
            r#""kidney_expert": {"needed": true, "reasons": ["Declining renal function noted in referrals"]}"#,
        );

        let mut client = MockReasoningClient::new();
        client
            .expect_generate()
            .times(1)
            .returning(move |_, _, _| Ok(response.clone()));

        let orchestrator = ExpertOrchestrator::with_client(test_config(), Box::new(client));
        let request: ExpertAnalysisRequest = serde_json::from_str(
            r#"{"carePlan": {"specialistReferrals": ["Recommend nephrology follow-up for declining renal function"]}}"#,
        )
        .unwrap();

        let selection = orchestrator.determine_required_experts(&request).await;
        assert_eq!(selection.status, "success");
        assert!(selection.required_experts["kidney_expert"].needed);
        assert!(!selection.required_experts["podiatrist"].needed);
        assert_eq!(selection.required_experts.len(), 12);
    }

    #[tokio::test]
    async fn test_invocation_failure_degrades_to_default_map() {
        let mut client = MockReasoningClient::new();
        client.expect_generate().times(1).returning(|_, _, _| {
            Err(OrchestratorError::ReasoningUnavailable(
                "quota exceeded".to_string(),
            ))
        });

        let orchestrator = ExpertOrchestrator::with_client(test_config(), Box::new(client));
        let selection = orchestrator
            .determine_required_experts(&ExpertAnalysisRequest::default())
            .await;

        assert_eq!(selection.status, "success");
        assert_eq!(selection.required_experts, default_decision_map());
    }

    #[tokio::test]
    async fn test_prompt_and_generation_config_reach_the_client() {
        let mut client = MockReasoningClient::new();
        client
            .expect_generate()
            .withf(|system, prompt, generation| {
                system.contains("medical expert system")
                    && prompt.contains("Consider the following experts:")
                    && generation.max_tokens == 4000
            })
            .times(1)
            .returning(|_, _, _| Ok("not json".to_string()));

        let orchestrator = ExpertOrchestrator::with_client(test_config(), Box::new(client));
        let selection = orchestrator
            .determine_required_experts(&ExpertAnalysisRequest::default())
            .await;
        assert_eq!(selection.required_experts, default_decision_map());
    }
}
