use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::expert_ids;

/// Per-expert result of the relevance evaluation.
///
/// `needed` is a strict boolean by construction; a response encoding the
/// decision as a string or number fails deserialization outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertDecision {
    pub needed: bool,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Decision map keyed by expert id; always exactly the twelve catalog ids.
pub type ExpertDecisionMap = BTreeMap<String, ExpertDecision>;

/// Build a fresh all-false, all-empty-reasons decision map covering the
/// full catalog.
///
/// The universal fallback for failed invocations and unusable responses.
/// A new map is constructed on every call; nothing is shared across
/// invocations.
pub fn default_decision_map() -> ExpertDecisionMap {
    expert_ids()
        .map(|id| (id.to_string(), ExpertDecision::default()))
        .collect()
}

/// Output document of the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertSelection {
    pub required_experts: ExpertDecisionMap,
    pub status: String,
}

impl ExpertSelection {
    /// Wrap a decision map in the success envelope.
    ///
    /// The orchestrator has no caller-visible failure path, so this is the
    /// only constructor.
    pub fn success(required_experts: ExpertDecisionMap) -> Self {
        Self {
            required_experts,
            status: "success".to_string(),
        }
    }
}
