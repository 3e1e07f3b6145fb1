//! Expert-Selection Orchestrator for CarePlan Engine
//!
//! Takes a generated care plan, asks a reasoning model which of the twelve
//! specialty advisors should be consulted and why, validates the model's
//! structured answer against a strict schema, and falls back to a safe
//! all-false default whenever the answer is unusable. Downstream advisory
//! stages fan out from the returned decision map.
//!
//! # Key Features
//!
//! - **Fixed Expert Catalog**: twelve specialty descriptors, defined once
//! - **Deterministic Prompt Rendering**: pure templating, total for any plan
//! - **Pluggable Reasoning Providers**: AWS Bedrock or self-hosted Ollama
//! - **Strict Response Validation**: boolean-only decisions, full catalog
//!   coverage, whole-response fallback on anything unparseable
//! - **No Caller-Visible Failures**: every degradation collapses into the
//!   default decision map; the call itself always succeeds
//! - **PHI-Safe Logging**: raw model output is redacted before logging
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use expert_orchestrator::{ExpertAnalysisRequest, ExpertOrchestrator, OrchestratorConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OrchestratorConfig::from_env()?;
//! let orchestrator = ExpertOrchestrator::new(config)?;
//!
//! let request: ExpertAnalysisRequest = serde_json::from_str(
//!     r#"{"carePlan": {"specialistReferrals": ["Refer to nephrology"]}}"#,
//! )?;
//!
//! let selection = orchestrator.determine_required_experts(&request).await;
//! for (expert_id, decision) in &selection.required_experts {
//!     println!("{expert_id}: needed={}", decision.needed);
//! }
//! # Ok(())
//! # }
//! ```

pub mod care_plan;
pub mod catalog;
pub mod config;
pub mod decision;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod service;
pub mod validator;

pub use care_plan::*;
pub use catalog::*;
pub use config::*;
pub use decision::*;
pub use error::*;
pub use prompt::*;
pub use providers::{create_client, ReasoningClient};
pub use service::*;
pub use validator::*;
