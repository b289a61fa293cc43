//! In-memory implementation of AccountRepository
//!
//! Used by the `memory` storage backend and by tests. Every mutation runs
//! under the map's write lock, which is what makes uniqueness checks and
//! favorites set operations atomic here.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountChanges};
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// Account store backed by a `HashMap` keyed by account id
#[derive(Clone)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn username_taken(username: &str) -> DomainError {
    DomainError::Conflict {
        message: format!("Username {} already exists", username),
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.username == account.username) {
            return Err(username_taken(&account.username));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn replace(
        &self,
        id: Uuid,
        changes: AccountChanges,
    ) -> Result<Option<Account>, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|a| a.id != id && a.username == changes.username)
        {
            return Err(username_taken(&changes.username));
        }

        Ok(accounts.get_mut(&id).map(|account| {
            account.apply_changes(changes);
            account.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(&id).is_some())
    }

    async fn add_favorite(
        &self,
        id: Uuid,
        movie_id: &str,
    ) -> Result<Option<Account>, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.get_mut(&id).map(|account| {
            account.add_favorite(movie_id);
            account.clone()
        }))
    }

    async fn remove_favorite(
        &self,
        id: Uuid,
        movie_id: &str,
    ) -> Result<Option<Account>, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.get_mut(&id).map(|account| {
            account.remove_favorite(movie_id);
            account.clone()
        }))
    }
}
