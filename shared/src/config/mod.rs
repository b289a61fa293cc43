//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT and password hashing configuration
//! - `database` - Database connection pool and storage backend selection
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use database::{DatabaseConfig, StorageBackend, StorageConfig};
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Prefix for layered environment overrides, e.g. `MYFLIX__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "MYFLIX";

/// Catalog file loaded into the in-memory store during development
pub const DEFAULT_SEED_FILE: &str = "data/movies.json";

/// Looks up one plain (unprefixed) environment variable
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Reads and parses a variable; unset or unparsable values are ignored
pub(crate) fn parsed<T: std::str::FromStr>(env: EnvLookup<'_>, key: &str) -> Option<T> {
    env(key).and_then(|v| v.trim().parse().ok())
}

/// Errors raised while assembling the application configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read configuration: {0}")]
    Source(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Storage backend selection
    #[serde(default)]
    pub storage: StorageConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            database: DatabaseConfig::new("mysql://localhost:3306/myflix_dev"),
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                seed_file: Some(PathBuf::from(DEFAULT_SEED_FILE)),
            },
            auth: AuthConfig::default(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            database: DatabaseConfig::new("mysql://prod-db:3306/myflix").with_max_connections(50),
            storage: StorageConfig {
                backend: StorageBackend::Mysql,
                seed_file: None,
            },
            // secret left at the default so `validate` forces an override
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Defaults for the given environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load configuration from plain environment variables
    pub fn from_env() -> Self {
        let mut config = Self::for_environment(Environment::from_env());
        config.apply_env(&process_env);
        config
    }

    /// Overlay the plain variables (`SERVER_PORT`, `DATABASE_URL`,
    /// `JWT_SECRET`, `ACCESS_LOG_FILE`, ...) that are set
    pub fn apply_env(&mut self, env: EnvLookup<'_>) {
        self.server.apply_env(env);
        self.database.apply_env(env);
        self.storage.apply_env(env);
        self.auth.apply_env(env);
        self.cors.apply_env(env);
        self.logging.apply_env(env);
    }

    /// Load layered configuration: environment defaults, then the optional
    /// TOML file named by `MYFLIX_CONFIG` (or `config.<env>.toml`), then
    /// `MYFLIX__SECTION__KEY` variables, then the plain variables read by
    /// [`AppConfig::apply_env`].
    pub fn load() -> Result<Self, ConfigLoadError> {
        let env = Environment::from_env();
        let path = std::env::var("MYFLIX_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env.config_file()));
        Self::load_from(env, &path)
    }

    /// Layered load with an explicit file path
    pub fn load_from(env: Environment, path: &Path) -> Result<Self, ConfigLoadError> {
        Self::load_with(env, path, &process_env)
    }

    /// Layered load with an explicit file path and plain-variable lookup
    pub fn load_with(
        env: Environment,
        path: &Path,
        plain_env: EnvLookup<'_>,
    ) -> Result<Self, ConfigLoadError> {
        let defaults = Self::for_environment(env);

        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&defaults)?)
            .add_source(::config::File::from(path.to_path_buf()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Self = settings.try_deserialize()?;
        config.apply_env(plain_env);
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that must never reach production
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigLoadError::Invalid(
                "JWT secret must be set in production".to_string(),
            ));
        }
        if self.auth.jwt.secret.is_empty() {
            return Err(ConfigLoadError::Invalid("JWT secret must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.cors.allows_any_origin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_requires_secret() {
        let mut config = AppConfig::production();
        assert!(matches!(config.validate(), Err(ConfigLoadError::Invalid(_))));

        config.auth.jwt = JwtConfig::new("a-real-secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "0.0.0.0"
port = 9090

[storage]
backend = "mysql"

[cors]
allowed_origins = ["https://myflix.example.com"]
"#
        )
        .unwrap();

        let config =
            AppConfig::load_with(Environment::Development, file.path(), &|_: &str| None).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.storage.backend, StorageBackend::Mysql);
        assert_eq!(config.cors.allowed_origins, vec!["https://myflix.example.com"]);
        // untouched sections keep their defaults
        assert_eq!(config.auth.bcrypt_cost, 10);
    }

    #[test]
    fn test_plain_variables_overlay_layered_load() {
        let vars: HashMap<&str, &str> = [
            ("ACCESS_LOG_FILE", "/tmp/myflix_access.log"),
            ("JWT_SECRET", "a-real-production-secret"),
            ("SERVER_PORT", "9191"),
            ("DATABASE_URL", "mysql://db:3306/myflix"),
            ("CATALOG_SEED_FILE", ""),
        ]
        .into_iter()
        .collect();
        let lookup = |key: &str| vars.get(key).map(|v| v.to_string());

        let config = AppConfig::load_with(
            Environment::Production,
            Path::new("does-not-exist.toml"),
            &lookup,
        )
        .unwrap();

        assert_eq!(
            config.logging.access_log_file,
            Some(PathBuf::from("/tmp/myflix_access.log"))
        );
        assert_eq!(config.auth.jwt.secret, "a-real-production-secret");
        assert_eq!(config.server.port, 9191);
        assert_eq!(config.database.url, "mysql://db:3306/myflix");
        assert_eq!(config.storage.seed_file, None);
    }

    #[test]
    fn test_production_without_secret_still_rejected() {
        let result = AppConfig::load_with(
            Environment::Production,
            Path::new("does-not-exist.toml"),
            &|_: &str| None,
        );
        assert!(matches!(result, Err(ConfigLoadError::Invalid(_))));
    }

    #[test]
    fn test_unparsable_plain_values_are_ignored() {
        let mut config = AppConfig::development();
        config.apply_env(&|key: &str| (key == "SERVER_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_with(
            Environment::Development,
            Path::new("does-not-exist.toml"),
            &|_: &str| None,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
    }
}
