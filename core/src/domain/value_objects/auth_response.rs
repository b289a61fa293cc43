//! Login response value object.

use serde::{Deserialize, Serialize};

use super::account_profile::AccountProfile;

/// Returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: AccountProfile,

    /// Signed JWT to send as `Authorization: Bearer <token>`
    pub token: String,

    /// Always `"Bearer"`
    pub token_type: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(user: AccountProfile, token: String, expires_in: i64) -> Self {
        Self {
            user,
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
