//! # myFlix Core
//!
//! Core business logic and domain layer for the myFlix backend.
//! This crate contains domain entities, the access service and its
//! collaborators, repository interfaces with in-memory implementations,
//! and the error types shared by every layer above it.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
