//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::{parsed, EnvLookup};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 7 * 86400,
            issuer: String::from("myflix"),
            audience: String::from("myflix-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Overlay `JWT_SECRET`, `JWT_ACCESS_TOKEN_EXPIRY` (seconds) and `BCRYPT_COST`
    pub fn apply_env(&mut self, env: EnvLookup<'_>) {
        if let Some(secret) = env("JWT_SECRET").filter(|s| !s.is_empty()) {
            self.jwt.secret = secret;
        }
        if let Some(expiry) = parsed(env, "JWT_ACCESS_TOKEN_EXPIRY") {
            self.jwt.access_token_expiry = expiry;
        }
        if let Some(cost) = parsed(env, "BCRYPT_COST") {
            self.bcrypt_cost = cost;
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_bcrypt_cost() -> u32 {
    10
}
