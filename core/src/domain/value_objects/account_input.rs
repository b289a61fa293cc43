//! Account data as submitted for registration or update.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw account fields, validated before anything is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInput {
    pub username: String,
    /// Plaintext; hashed by the service, never stored as-is
    pub password: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
}

impl AccountInput {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        birthday: Option<NaiveDate>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            birthday,
        }
    }
}
