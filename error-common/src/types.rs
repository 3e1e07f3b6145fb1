use thiserror::Error;

/// Pipeline-wide error enum shared by the stage crates
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Reasoning-model invocation errors
    #[error("Reasoning error: {0}")]
    ReasoningError(String),

    /// Structured-response validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Conversation/visit record errors
    #[error("Record error: {0}")]
    RecordError(String),

    /// Stage configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// External collaborator errors (transcription, knowledge base, events)
    #[error("External service error: {0}")]
    ExternalError(String),

    /// Internal stage errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Async logging function for errors
pub async fn log_error(context: &crate::ErrorContext, error: &PipelineError) {
    tracing::error!(
        visit_id = context.visit_id.as_deref(),
        session_id = context.session_id.as_deref(),
        trace_id = context.trace_id.as_deref(),
        error = %error,
        "Pipeline error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_category() {
        let err = PipelineError::ReasoningError("model call failed".to_string());
        assert_eq!(err.to_string(), "Reasoning error: model call failed");

        let err = PipelineError::ValidationError("bad shape".to_string());
        assert!(err.to_string().starts_with("Validation error"));
    }

    #[test]
    fn test_anyhow_passthrough() {
        let inner = anyhow::anyhow!("timeout connecting upstream");
        let err: PipelineError = inner.into();
        assert_eq!(err.to_string(), "timeout connecting upstream");
    }
}
