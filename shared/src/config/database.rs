//! Database and storage backend configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{parsed, EnvLookup};

/// Database configuration for MySQL connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Apply bundled migrations on start-up
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/myflix"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            run_migrations: default_run_migrations(),
        }
    }
}

impl DatabaseConfig {
    /// Overlay `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS` and `DATABASE_CONNECT_TIMEOUT`
    pub fn apply_env(&mut self, env: EnvLookup<'_>) {
        if let Some(url) = env("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.url = url;
        }
        if let Some(max) = parsed(env, "DATABASE_MAX_CONNECTIONS") {
            self.max_connections = max;
        }
        if let Some(timeout) = parsed(env, "DATABASE_CONNECT_TIMEOUT") {
            self.connect_timeout = timeout;
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

/// Which store implementation backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local maps; data is lost on restart
    #[default]
    Memory,
    /// MySQL through the SQLx pool
    Mysql,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "mysql" => Ok(StorageBackend::Mysql),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Storage selection and catalog seeding
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// JSON file of movies loaded into the catalog on start-up
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Overlay `STORAGE_BACKEND` and `CATALOG_SEED_FILE`; an empty seed path disables seeding
    pub fn apply_env(&mut self, env: EnvLookup<'_>) {
        if let Some(backend) = parsed(env, "STORAGE_BACKEND") {
            self.backend = backend;
        }
        if let Some(path) = env("CATALOG_SEED_FILE") {
            self.seed_file = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
        }
    }
}

fn default_run_migrations() -> bool {
    true
}
