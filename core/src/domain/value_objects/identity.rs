//! Resolved caller identity for a single request.

use uuid::Uuid;

use crate::domain::entities::{Account, AccountRole};

/// The account a verified bearer token belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub account_id: Uuid,
    pub username: String,
    pub role: AccountRole,
}

impl Identity {
    /// Whether this caller may mutate `target`: itself, or anyone when admin
    pub fn can_act_on(&self, target: &Account) -> bool {
        self.account_id == target.id || self.role == AccountRole::Admin
    }
}

impl From<&Account> for Identity {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id,
            username: account.username.clone(),
            role: account.role,
        }
    }
}
