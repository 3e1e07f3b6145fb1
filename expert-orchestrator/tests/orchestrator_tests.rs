//! End-to-end tests for the expert-selection orchestrator
//!
//! Covers the full render → invoke → normalize chain with stub reasoning
//! clients:
//! - a complete, valid model response passes through unchanged
//! - invocation failures and timeouts collapse to the default decision map
//! - unparseable responses collapse to the default decision map
//! - the output envelope always reports success
//!
//! No network access required: every reasoning client here is an in-process
//! stub.

use std::time::Duration;

use async_trait::async_trait;

use expert_orchestrator::{
    default_decision_map, expert_ids, ExpertAnalysisRequest, ExpertOrchestrator,
    GenerationConfig, OrchestratorConfig, OrchestratorError, OrchestratorResult,
    ReasoningClient, ReasoningProviderConfig,
};

fn test_config(timeout_ms: u64) -> OrchestratorConfig {
    OrchestratorConfig {
        provider: ReasoningProviderConfig::Ollama {
            api_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
        },
        generation: GenerationConfig::default(),
        request_timeout_ms: timeout_ms,
    }
}

/// Returns a fixed response for every call
struct CannedClient {
    response: String,
}

#[async_trait]
impl ReasoningClient for CannedClient {
    async fn generate(
        &self,
        _system: &str,
        _prompt: &str,
        _generation: &GenerationConfig,
    ) -> OrchestratorResult<String> {
        Ok(self.response.clone())
    }
}

/// Fails every call
struct FailingClient;

#[async_trait]
impl ReasoningClient for FailingClient {
    async fn generate(
        &self,
        _system: &str,
        _prompt: &str,
        _generation: &GenerationConfig,
    ) -> OrchestratorResult<String> {
        Err(OrchestratorError::ReasoningUnavailable(
            "connection refused".to_string(),
        ))
    }
}

/// Responds, but slower than any configured timeout in these tests
struct SlowClient;

#[async_trait]
impl ReasoningClient for SlowClient {
    async fn generate(
        &self,
        _system: &str,
        _prompt: &str,
        _generation: &GenerationConfig,
    ) -> OrchestratorResult<String> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok(full_response(None))
    }
}

fn full_response(needed_id: Option<&str>) -> String {
    let entries: Vec<String> = expert_ids()
        .map(|id| {
            if Some(id) == needed_id {
                format!(
                    r#""{id}": {{"needed": true, "reasons": ["The care plan recommends nephrology follow-up for declining renal function"]}}"#
                )
            } else {
                format!(r#""{id}": {{"needed": false, "reasons": []}}"#)
            }
        })
        .collect();
    format!("{{{}}}", entries.join(","))
}

fn referral_request() -> ExpertAnalysisRequest {
    serde_json::from_str(
        r#"{"carePlan": {"specialistReferrals": ["Recommend nephrology follow-up for declining renal function"]}}"#,
    )
    .unwrap()
}

#[tokio::test]
async fn valid_response_passes_through_with_success_status() {
    let orchestrator = ExpertOrchestrator::with_client(
        test_config(1_000),
        Box::new(CannedClient {
            response: full_response(Some("kidney_expert")),
        }),
    );

    let selection = orchestrator.determine_required_experts(&referral_request()).await;

    assert_eq!(selection.status, "success");
    assert_eq!(selection.required_experts.len(), 12);
    let kidney = &selection.required_experts["kidney_expert"];
    assert!(kidney.needed);
    assert!(kidney.reasons.iter().any(|r| r.contains("renal function")));
    for (id, decision) in &selection.required_experts {
        if id != "kidney_expert" {
            assert!(!decision.needed, "{id} unexpectedly marked needed");
        }
    }
}

#[tokio::test]
async fn invocation_failure_yields_default_map_and_success_status() {
    let orchestrator =
        ExpertOrchestrator::with_client(test_config(1_000), Box::new(FailingClient));

    let selection = orchestrator
        .determine_required_experts(&ExpertAnalysisRequest::default())
        .await;

    assert_eq!(selection.status, "success");
    assert_eq!(selection.required_experts, default_decision_map());
}

#[tokio::test]
async fn timeout_yields_default_map_and_success_status() {
    let orchestrator = ExpertOrchestrator::with_client(test_config(50), Box::new(SlowClient));

    let selection = orchestrator
        .determine_required_experts(&ExpertAnalysisRequest::default())
        .await;

    assert_eq!(selection.status, "success");
    assert_eq!(selection.required_experts, default_decision_map());
}

#[tokio::test]
async fn refusal_prose_yields_default_map() {
    let orchestrator = ExpertOrchestrator::with_client(
        test_config(1_000),
        Box::new(CannedClient {
            response: "I cannot determine this.".to_string(),
        }),
    );

    let selection = orchestrator
        .determine_required_experts(&ExpertAnalysisRequest::default())
        .await;

    assert_eq!(selection.required_experts, default_decision_map());
}

#[tokio::test]
async fn empty_request_still_produces_full_coverage() {
    let orchestrator = ExpertOrchestrator::with_client(
        test_config(1_000),
        Box::new(CannedClient {
            response: full_response(None),
        }),
    );

    let request: ExpertAnalysisRequest = serde_json::from_str("{}").unwrap();
    let selection = orchestrator.determine_required_experts(&request).await;

    let expected_ids: Vec<&str> = expert_ids().collect();
    let actual_ids: Vec<&str> = selection.required_experts.keys().map(String::as_str).collect();
    let mut sorted_expected = expected_ids;
    sorted_expected.sort_unstable();
    assert_eq!(actual_ids, sorted_expected);
}

#[tokio::test]
async fn output_document_serializes_to_pipeline_shape() {
    let orchestrator = ExpertOrchestrator::with_client(
        test_config(1_000),
        Box::new(CannedClient {
            response: full_response(Some("pharmacist")),
        }),
    );

    let selection = orchestrator.determine_required_experts(&referral_request()).await;
    let value = serde_json::to_value(&selection).unwrap();

    assert_eq!(value["status"], "success");
    let experts = value["requiredExperts"].as_object().unwrap();
    assert_eq!(experts.len(), 12);
    assert_eq!(experts["pharmacist"]["needed"], true);
    assert!(experts["pharmacist"]["reasons"].is_array());
}

#[tokio::test]
async fn concurrent_invocations_do_not_interfere() {
    let ok = ExpertOrchestrator::with_client(
        test_config(1_000),
        Box::new(CannedClient {
            response: full_response(Some("kidney_expert")),
        }),
    );
    let failing = ExpertOrchestrator::with_client(test_config(1_000), Box::new(FailingClient));

    let request = referral_request();
    let (first, second) = tokio::join!(
        ok.determine_required_experts(&request),
        failing.determine_required_experts(&request),
    );

    assert!(first.required_experts["kidney_expert"].needed);
    assert_eq!(second.required_experts, default_decision_map());
}
