//! Account request bodies

use chrono::NaiveDate;
use serde::Deserialize;

use mf_core::domain::value_objects::AccountInput;
use mf_core::errors::DomainError;

/// Body of `POST /users` and `PUT /users/{username}`
///
/// Every field is optional at the JSON level so an absent field is reported
/// as a missing field rather than a generic parse failure. Capitalized keys
/// are accepted for clients written against the older API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountRequest {
    #[serde(default, alias = "Username")]
    pub username: Option<String>,

    #[serde(default, alias = "Password")]
    pub password: Option<String>,

    #[serde(default, alias = "Email")]
    pub email: Option<String>,

    /// `YYYY-MM-DD`
    #[serde(default, alias = "Birthday")]
    pub birthday: Option<NaiveDate>,
}

impl AccountRequest {
    /// Converts into the service input, failing on the first absent field
    pub fn into_input(self) -> Result<AccountInput, DomainError> {
        let username = required("username", self.username)?;
        let password = required("password", self.password)?;
        let email = required("email", self.email)?;

        Ok(AccountInput::new(username, password, email, self.birthday))
    }
}

pub(crate) fn required(field: &str, value: Option<String>) -> Result<String, DomainError> {
    value.ok_or_else(|| DomainError::MissingField {
        field: field.to_string(),
    })
}
