use error_common::PipelineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The reasoning-model call failed, whatever the underlying cause.
    /// Transport, quota, and malformed-request failures are deliberately
    /// not distinguished at this boundary.
    #[error("Reasoning model unavailable: {0}")]
    ReasoningUnavailable(String),

    /// The call succeeded but the returned text does not satisfy the
    /// expert-decision schema.
    #[error("Malformed reasoning response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for orchestrator operations
pub type OrchestratorResult<T> = std::result::Result<T, OrchestratorError>;

impl From<OrchestratorError> for PipelineError {
    fn from(err: OrchestratorError) -> Self {
        match err {
            OrchestratorError::Config(message) => PipelineError::ConfigError(message),
            OrchestratorError::ReasoningUnavailable(message) => {
                PipelineError::ReasoningError(message)
            }
            OrchestratorError::MalformedResponse(message) => {
                PipelineError::ValidationError(message)
            }
            OrchestratorError::Network(err) => PipelineError::ExternalError(err.to_string()),
            OrchestratorError::Serialization(err) => PipelineError::InternalError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_conversion() {
        let err = OrchestratorError::ReasoningUnavailable("quota exceeded".to_string());
        let pipeline: PipelineError = err.into();
        assert_eq!(pipeline.to_string(), "Reasoning error: quota exceeded");

        let err = OrchestratorError::MalformedResponse("not a JSON object".to_string());
        let pipeline: PipelineError = err.into();
        assert!(pipeline.to_string().starts_with("Validation error"));
    }
}
