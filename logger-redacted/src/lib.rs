//! PHI-aware log redaction for CarePlan Engine
//!
//! Clinical transcripts, care plans, and raw reasoning-model output can all
//! contain protected health information. Any such text must pass through
//! this crate before it reaches a log line.
//!
//! # Detected Data Types
//!
//! - **Medical Record Numbers**: MRN 123456 → MRN[REDACTED]
//! - **SSN**: 123-45-6789 → \*\*\*-\*\*-\*\*\*\*
//! - **Phone Numbers**: (555) 123-4567 → (\*\*\*) \*\*\*-\*\*\*\*
//! - **Email Addresses**: user@example.com → u\*\*\*@e\*\*\*
//! - **Dates of Birth**: 01/02/1958 → \[DATE\]
//!
//! Redacted values can optionally be replaced with short hashes so that
//! repeated occurrences remain correlatable across log lines without
//! exposing the underlying value.
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::redact_for_log;
//!
//! let raw = "Patient MRN 445912 reachable at (555) 123-4567";
//! let safe = redact_for_log(raw);
//! assert!(!safe.contains("445912"));
//! tracing::debug!(response = %safe, "Raw reasoning response");
//! ```

pub mod config;
pub mod redactor;

pub use config::*;
pub use redactor::*;

/// Redact text with the default clinical configuration.
///
/// Convenience entry point for log call sites; builds a redactor with
/// [`RedactionConfig::default`] on each call.
pub fn redact_for_log(text: &str) -> String {
    ClinicalRedactor::new(RedactionConfig::default()).redact(text)
}
