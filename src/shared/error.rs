//! Shared Error Types
//!
//! This module defines the error produced when a request body fails field
//! validation. The backend wraps it in `BackendError` and turns it into a
//! 400 response. Malformed JSON never reaches this type; the body extractor
//! reports it as a non-field validation error.
//!
//! # Usage
//!
//! ```rust
//! use yatube_api::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "This field may not be blank.");
//! assert_eq!(error.field(), "text");
//! ```
use thiserror::Error;

/// Field name used for errors that concern the whole body rather than one field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Shared error types raised while validating request bodies
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a validation error that is not tied to a single field
    pub fn non_field(message: impl Into<String>) -> Self {
        Self::validation(NON_FIELD_ERRORS, message)
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
