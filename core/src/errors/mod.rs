//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError};

use mf_shared::validation::ValidationErrors;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// One or more field rules failed; nothing was written
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// A required input field was absent
    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Duplicate value for a unique field
    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    /// Caller is authenticated but may not act on the target
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
