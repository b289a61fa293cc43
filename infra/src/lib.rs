//! # Infrastructure Layer
//!
//! Concrete persistence for the myFlix backend:
//! - **Database**: MySQL account and catalog repositories using SQLx,
//!   connection pooling and schema migrations
//! - **Seed**: loading the movie catalog from a JSON file into either store
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Catalog seeding
pub mod seed;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog file could not be read or applied
    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
