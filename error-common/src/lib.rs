//! Common error handling utilities for CarePlan Engine
//!
//! This module provides the standardized error types, error codes, and
//! context helpers shared by the pipeline stages (transcript ingestion,
//! care-plan generation, expert selection, visit-record assembly). It keeps
//! error handling consistent across stages and keeps patient data out of
//! error messages.
//!
//! # Key Features
//!
//! - **Standardized Error Types**: one pipeline-wide error vocabulary
//! - **Error Codes**: structured per-stage codes for logs and API responses
//! - **Context Preservation**: visit/session/trace correlation without PHI
//! - **Observability**: integration with tracing
//!
//! # Example
//!
//! ```rust
//! use error_common::{PipelineError, ErrorContext, codes};
//!
//! fn check_visit_id(visit_id: &str) -> Result<(), PipelineError> {
//!     if visit_id.is_empty() {
//!         return Err(PipelineError::ValidationError(
//!             "visit id cannot be empty".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let ctx = ErrorContext::new().with_visit_id("visit-123".to_string());
//! if let Err(e) = check_visit_id("") {
//!     tracing::error!(
//!         error_code = codes::validation::INVALID_INPUT,
//!         visit_id = ctx.visit_id.as_deref(),
//!         "Validation failed: {}",
//!         e
//!     );
//! }
//! ```

pub mod codes;
pub mod context;
pub mod types;

pub use context::*;
pub use types::*;
