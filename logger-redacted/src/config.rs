// Redaction configuration
use serde::{Deserialize, Serialize};

/// Logger configuration for the pipeline stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub redaction_enabled: bool,
    pub hash_for_correlation: bool,
    pub log_level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            redaction_enabled: true,
            hash_for_correlation: false,
            log_level: "info".to_string(),
        }
    }
}

impl LoggerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let redaction_enabled = std::env::var("LOG_REDACTION_ENABLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        let hash_for_correlation = std::env::var("LOG_REDACTION_HASHING")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            redaction_enabled,
            hash_for_correlation,
            log_level,
        }
    }
}
