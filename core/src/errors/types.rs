//! Error types for authentication and bearer-token verification
//!
//! Token failure reasons are kept distinct for logging; the service layer
//! collapses every one of them into a single unauthorized outcome before
//! anything reaches a client.

use thiserror::Error;

/// Credential check failures at login
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Bearer-token verification failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing bearer credential")]
    MissingCredential,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    /// Token is genuine but its subject no longer exists
    #[error("Unknown token subject")]
    UnknownSubject,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Short machine-readable reason for log lines
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::MissingCredential => "missing_credential",
            TokenError::MalformedToken => "malformed",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Expired => "expired",
            TokenError::UnknownSubject => "unknown_subject",
            TokenError::TokenGenerationFailed => "generation_failed",
        }
    }
}
