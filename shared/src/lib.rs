//! Shared utilities and common types for the myFlix server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Field validation primitives
//! - Common response types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigLoadError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LoggingConfig, ServerConfig, StorageBackend, StorageConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, MessageResponse};
pub use utils::validation;
