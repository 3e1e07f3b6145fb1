//! Response validation and normalization
//!
//! The safety boundary of the orchestrator: whatever the reasoning call
//! produced (an error, prose, broken JSON, or a well-formed decision map),
//! [`normalize`] always returns a decision map covering exactly the twelve
//! catalog ids. There is no partial salvage: a response that fails the
//! schema is discarded whole in favor of the default map.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use error_common::codes;
use logger_redacted::redact_for_log;

use crate::catalog::EXPERT_CATALOG;
use crate::decision::{default_decision_map, ExpertDecision, ExpertDecisionMap};
use crate::error::{OrchestratorError, OrchestratorResult};

lazy_static! {
    // Outermost brace-delimited span; models often wrap the object in
    // prose or a code fence.
    static ref JSON_OBJECT_REGEX: Regex = Regex::new(r"\{[\s\S]*\}").unwrap();
}

/// Normalize a reasoning-call outcome into a complete decision map.
///
/// Never fails. Invocation errors and malformed responses both collapse
/// into the default all-false map; they are distinguished only in the logs.
pub fn normalize(outcome: OrchestratorResult<String>) -> ExpertDecisionMap {
    match outcome {
        Ok(raw) => match validate_response(&raw) {
            Ok(map) => map,
            Err(err) => {
                warn!(
                    error_code = codes::reasoning::MALFORMED_RESPONSE,
                    response = %redact_for_log(&raw),
                    "Discarding malformed reasoning response: {err}"
                );
                default_decision_map()
            }
        },
        Err(err) => {
            warn!(
                error_code = codes::reasoning::INVOCATION_FAILED,
                "Reasoning invocation failed: {err}"
            );
            default_decision_map()
        }
    }
}

/// Parse and strictly validate raw response text.
///
/// # Errors
///
/// Returns [`OrchestratorError::MalformedResponse`] when the text contains
/// no parseable decision map, including when any `needed` field is not a
/// JSON boolean.
pub fn validate_response(raw: &str) -> OrchestratorResult<ExpertDecisionMap> {
    let parsed = parse_decisions(raw)?;
    Ok(enforce_catalog_coverage(parsed))
}

fn parse_decisions(raw: &str) -> OrchestratorResult<BTreeMap<String, ExpertDecision>> {
    match serde_json::from_str(raw) {
        Ok(map) => Ok(map),
        Err(direct_err) => {
            let Some(candidate) = JSON_OBJECT_REGEX.find(raw) else {
                return Err(OrchestratorError::MalformedResponse(format!(
                    "no JSON object in response: {direct_err}"
                )));
            };
            serde_json::from_str(candidate.as_str())
                .map_err(|e| OrchestratorError::MalformedResponse(e.to_string()))
        }
    }
}

/// Force the parsed map onto the catalog key set: missing ids get the
/// zero-value decision, ids outside the catalog are dropped.
fn enforce_catalog_coverage(
    mut parsed: BTreeMap<String, ExpertDecision>,
) -> ExpertDecisionMap {
    let mut result = ExpertDecisionMap::new();
    for expert in &EXPERT_CATALOG {
        let decision = parsed.remove(expert.id).unwrap_or_else(|| {
            warn!(
                expert_id = expert.id,
                "Reasoning response missing expert entry; defaulting to not needed"
            );
            ExpertDecision::default()
        });
        result.insert(expert.id.to_string(), decision);
    }
    for unknown in parsed.keys() {
        warn!(
            expert_id = %unknown,
            "Dropping unknown expert entry from reasoning response"
        );
    }
    result
}
