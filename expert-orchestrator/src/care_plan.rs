use serde::{Deserialize, Serialize};

/// A generated care plan, as produced by the upstream care-plan stage.
///
/// Opaque to the orchestrator: the plan is embedded into the evaluation
/// prompt verbatim and never inspected for clinical content. Absent
/// sections serialize as omitted rather than as empty arrays, so the
/// prompt mirrors exactly what the upstream stage produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarePlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_tests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_education: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_recommendations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist_referrals: Option<Vec<String>>,
}

/// Input document for the orchestrator; an absent care plan is treated as
/// the empty plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpertAnalysisRequest {
    pub care_plan: CarePlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan_serializes_to_empty_object() {
        let plan = CarePlan::default();
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = r#"{
            "visitId": "visit-9",
            "followUpRecommendations": ["Return in two weeks"],
            "specialistReferrals": ["Refer to nephrology"]
        }"#;
        let plan: CarePlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.visit_id.as_deref(), Some("visit-9"));
        assert_eq!(
            plan.follow_up_recommendations,
            Some(vec!["Return in two weeks".to_string()])
        );
        assert!(plan.diagnostic_tests.is_none());
    }

    #[test]
    fn test_request_with_absent_care_plan() {
        let request: ExpertAnalysisRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.care_plan, CarePlan::default());
    }
}
