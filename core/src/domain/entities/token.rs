//! JWT claims for bearer authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Account;

/// Default access token lifetime (7 days)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "myflix";

/// JWT audience
pub const JWT_AUDIENCE: &str = "myflix-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Username at the time of issue
    pub username: String,

    pub role: String,

    pub iat: i64,
    pub exp: i64,
    pub nbf: i64,
    pub iss: String,
    pub aud: String,

    /// JWT ID
    pub jti: String,
}

impl Claims {
    /// Creates claims for an access token valid for `expiry_seconds`
    pub fn for_account(
        account: &Account,
        expiry_seconds: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: account.id.to_string(),
            username: account.username.clone(),
            role: account.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject back into an account id
    pub fn account_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
