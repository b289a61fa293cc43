//! MySQL implementation of the AccountRepository trait.
//!
//! Accounts live in `accounts`; favorites are rows of `account_favorites`
//! keyed by `(account_id, movie_id)`, so set-add is an `INSERT IGNORE` and
//! set-remove a keyed `DELETE`. Neither reads the set first.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mf_core::domain::entities::{Account, AccountChanges, AccountRole, MovieId};
use mf_core::errors::DomainError;
use mf_core::repositories::AccountRepository;

const ACCOUNT_COLUMNS: &str =
    "id, username, password_hash, email, birthday, role, created_at, updated_at";

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity, without favorites
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;
        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get role: {}", e) })?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid account UUID: {}", e) })?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get username: {}", e) })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get password_hash: {}", e) })?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            birthday: row
                .try_get::<Option<NaiveDate>, _>("birthday")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get birthday: {}", e) })?,
            favorite_movies: BTreeSet::new(),
            role: AccountRole::parse(&role),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get updated_at: {}", e) })?,
        })
    }

    async fn load_favorites(&self, account_id: Uuid) -> Result<BTreeSet<MovieId>, DomainError> {
        let rows = sqlx::query("SELECT movie_id FROM account_favorites WHERE account_id = ?")
            .bind(account_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to load favorites: {}", e) })?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("movie_id")
                    .map_err(|e| DomainError::Internal { message: format!("Failed to get movie_id: {}", e) })
            })
            .collect()
    }

    /// Fetch one account with its favorites filled in
    async fn fetch_one(&self, filter: &str, value: String) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE {} = ? LIMIT 1", ACCOUNT_COLUMNS, filter);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find account: {}", e) })?;

        match row {
            Some(row) => {
                let mut account = Self::row_to_account(&row)?;
                account.favorite_movies = self.load_favorites(account.id).await?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    async fn touch(&self, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE accounts SET updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to touch account: {}", e) })?;
        Ok(())
    }
}

/// Duplicate usernames surface as a unique-key violation
fn map_write_error(e: sqlx::Error, username: &str, action: &str) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::warn!(username = %username, "Username already taken");
            DomainError::Conflict {
                message: format!("Username {} already exists", username),
            }
        }
        _ => DomainError::Internal {
            message: format!("Failed to {} account: {}", action, e),
        },
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts ORDER BY username", ACCOUNT_COLUMNS);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to list accounts: {}", e) })?;

        let favorite_rows = sqlx::query("SELECT account_id, movie_id FROM account_favorites")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to list favorites: {}", e) })?;

        let mut favorites: HashMap<String, BTreeSet<MovieId>> = HashMap::new();
        for row in &favorite_rows {
            let account_id: String = row
                .try_get("account_id")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get account_id: {}", e) })?;
            let movie_id: String = row
                .try_get("movie_id")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get movie_id: {}", e) })?;
            favorites.entry(account_id).or_default().insert(movie_id);
        }

        rows.iter()
            .map(|row| {
                let mut account = Self::row_to_account(row)?;
                if let Some(set) = favorites.remove(&account.id.to_string()) {
                    account.favorite_movies = set;
                }
                Ok(account)
            })
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.fetch_one("id", id.to_string()).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        self.fetch_one("username", username.to_string()).await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM accounts WHERE username = ?) AS found")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to check username: {}", e) })?;

        let found: i64 = row
            .try_get("found")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get existence result: {}", e) })?;
        Ok(found == 1)
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, username, password_hash, email, birthday, role, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.username)
            .bind(&account.password_hash)
            .bind(&account.email)
            .bind(account.birthday)
            .bind(account.role.as_str())
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &account.username, "create"))?;

        Ok(account)
    }

    async fn replace(
        &self,
        id: Uuid,
        changes: AccountChanges,
    ) -> Result<Option<Account>, DomainError> {
        let query = r#"
            UPDATE accounts
            SET username = ?, password_hash = ?, email = ?, birthday = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&changes.username)
            .bind(&changes.password_hash)
            .bind(&changes.email)
            .bind(changes.birthday)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &changes.username, "update"))?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        // Favorites go with the account via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to delete account: {}", e) })?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_favorite(
        &self,
        id: Uuid,
        movie_id: &str,
    ) -> Result<Option<Account>, DomainError> {
        // Selecting from accounts makes the insert a no-op for unknown ids
        let query = r#"
            INSERT IGNORE INTO account_favorites (account_id, movie_id, added_at)
            SELECT id, ?, ? FROM accounts WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(movie_id)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to add favorite: {}", e) })?;

        if result.rows_affected() > 0 {
            self.touch(id).await?;
        }

        self.find_by_id(id).await
    }

    async fn remove_favorite(
        &self,
        id: Uuid,
        movie_id: &str,
    ) -> Result<Option<Account>, DomainError> {
        let result = sqlx::query("DELETE FROM account_favorites WHERE account_id = ? AND movie_id = ?")
            .bind(id.to_string())
            .bind(movie_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to remove favorite: {}", e) })?;

        if result.rows_affected() > 0 {
            self.touch(id).await?;
        }

        self.find_by_id(id).await
    }
}
