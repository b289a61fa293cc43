//! Account repository trait defining the interface for account persistence.
//!
//! Besides plain lookups and writes, the store owns the favorites set of each
//! account. Set-add and set-remove are single conditional operations keyed by
//! account id, so concurrent favorite changes on one account never lose an
//! update.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountChanges};
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use mf_core::repositories::AccountRepository;
/// use mf_core::domain::entities::{Account, AccountChanges};
/// use mf_core::errors::DomainError;
///
/// struct DocumentAccountRepository {
///     // client handle
/// }
///
/// #[async_trait]
/// impl AccountRepository for DocumentAccountRepository {
///     async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_all(&self) -> Result<Vec<Account>, DomainError> { Ok(vec![]) }
/// #   async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, DomainError> { Ok(None) }
/// #   async fn create(&self, account: Account) -> Result<Account, DomainError> { Ok(account) }
/// #   async fn replace(&self, _id: Uuid, _c: AccountChanges) -> Result<Option<Account>, DomainError> { Ok(None) }
/// #   async fn delete(&self, _id: Uuid) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn add_favorite(&self, _id: Uuid, _m: &str) -> Result<Option<Account>, DomainError> { Ok(None) }
/// #   async fn remove_favorite(&self, _id: Uuid, _m: &str) -> Result<Option<Account>, DomainError> { Ok(None) }
/// }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// All accounts, ordered by username
    async fn find_all(&self) -> Result<Vec<Account>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Exact, case-sensitive username match
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Check if an account exists with the given username
    ///
    /// Default implementation delegates to [`AccountRepository::find_by_username`].
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Conflict)` - The username is already taken
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Overwrite the mutable fields of an account
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - The account after the change
    /// * `Ok(None)` - No account with this id
    /// * `Err(DomainError::Conflict)` - The new username belongs to another account
    async fn replace(
        &self,
        id: Uuid,
        changes: AccountChanges,
    ) -> Result<Option<Account>, DomainError>;

    /// Remove an account. Returns `false` if it did not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Atomic set-add on the favorites of account `id`
    ///
    /// Adding a movie that is already a favorite leaves the set unchanged.
    /// Returns `Ok(None)` if the account does not exist.
    async fn add_favorite(
        &self,
        id: Uuid,
        movie_id: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Atomic set-remove on the favorites of account `id`
    ///
    /// Removing a movie that is not a favorite is a no-op.
    /// Returns `Ok(None)` if the account does not exist.
    async fn remove_favorite(
        &self,
        id: Uuid,
        movie_id: &str,
    ) -> Result<Option<Account>, DomainError>;
}
