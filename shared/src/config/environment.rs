//! Environment configuration module

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use super::EnvLookup;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging/test environment
    Staging,
    /// Production environment
    Production,
}

impl Environment {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Get environment from ENV variable
    pub fn from_env() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("ENV"))
            .or_else(|_| env::var("RUST_ENV"))
            .unwrap_or_else(|_| String::from("development"))
            .parse()
            .unwrap_or(Environment::Development)
    }

    /// Get the configuration file name for this environment
    pub fn config_file(&self) -> &str {
        match self {
            Environment::Development => "config.development.toml",
            Environment::Staging => "config.staging.toml",
            Environment::Production => "config.production.toml",
        }
    }

    /// Get the .env file name for this environment
    pub fn env_file(&self) -> &str {
        match self {
            Environment::Development => ".env.development",
            Environment::Staging => ".env.staging",
            Environment::Production => ".env.production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default log filter (trace, debug, info, warn, error); `RUST_LOG` wins when set
    pub level: String,

    /// Append HTTP access records to this file instead of stderr
    #[serde(default)]
    pub access_log_file: Option<PathBuf>,

    /// Access log line format, in actix `Logger` syntax
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            access_log_file: None,
            access_log_format: default_access_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Create logging config for environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: String::from("debug"),
                ..Default::default()
            },
            Environment::Staging => Self::default(),
            Environment::Production => Self {
                level: String::from("info"),
                access_log_file: Some(PathBuf::from("log.txt")),
                ..Default::default()
            },
        }
    }

    /// Overlay `LOG_LEVEL` and `ACCESS_LOG_FILE`; an empty file path means stderr
    pub fn apply_env(&mut self, env: EnvLookup<'_>) {
        if let Some(level) = env("LOG_LEVEL").filter(|l| !l.is_empty()) {
            self.level = level;
        }
        if let Some(path) = env("ACCESS_LOG_FILE") {
            self.access_log_file = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
        }
    }
}

/// Combined log format: remote address, request line, status, size, referer, user agent
fn default_access_log_format() -> String {
    String::from(r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#)
}
