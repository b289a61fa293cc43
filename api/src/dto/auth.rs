//! Login request body

use serde::Deserialize;

use super::account::required;
use mf_core::errors::DomainError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, alias = "Username")]
    pub username: Option<String>,

    #[serde(default, alias = "Password")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns `(username, password)`
    pub fn into_credentials(self) -> Result<(String, String), DomainError> {
        Ok((
            required("username", self.username)?,
            required("password", self.password)?,
        ))
    }
}
