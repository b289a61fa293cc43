//! Account entity representing a registered myFlix user.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::movie::MovieId;
use crate::domain::value_objects::AccountProfile;

/// Role attached to an account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    #[default]
    Member,
    /// May update, delete and manage favorites of other accounts
    Admin,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Member => "member",
            AccountRole::Admin => "admin",
        }
    }

    /// Parses a stored role name; unknown values fall back to `Member`
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => AccountRole::Admin,
            _ => AccountRole::Member,
        }
    }
}

/// Account entity
///
/// Holds the bcrypt digest of the password. It never leaves the core as-is;
/// use [`Account::profile`] for anything that is shown to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
    pub favorite_movies: BTreeSet<MovieId>,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the mutable account fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountChanges {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
}

impl Account {
    /// Creates a member account with no favorites
    pub fn new(
        username: String,
        password_hash: String,
        email: String,
        birthday: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            email,
            birthday,
            favorite_movies: BTreeSet::new(),
            role: AccountRole::Member,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == AccountRole::Admin
    }

    /// Set-add. Returns `false` if the movie was already a favorite.
    pub fn add_favorite(&mut self, movie_id: &str) -> bool {
        let inserted = self.favorite_movies.insert(movie_id.to_string());
        if inserted {
            self.updated_at = Utc::now();
        }
        inserted
    }

    /// Set-remove. Returns `false` if the movie was not a favorite.
    pub fn remove_favorite(&mut self, movie_id: &str) -> bool {
        let removed = self.favorite_movies.remove(movie_id);
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    pub fn has_favorite(&self, movie_id: &str) -> bool {
        self.favorite_movies.contains(movie_id)
    }

    /// Overwrites every mutable field; favorites and role are kept
    pub fn apply_changes(&mut self, changes: AccountChanges) {
        self.username = changes.username;
        self.password_hash = changes.password_hash;
        self.email = changes.email;
        self.birthday = changes.birthday;
        self.updated_at = Utc::now();
    }

    pub fn profile(&self) -> AccountProfile {
        AccountProfile::from(self)
    }
}
