//! Main access service implementation

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::domain::entities::account::{Account, AccountChanges};
use crate::domain::entities::movie::{Director, Genre, Movie};
use crate::domain::value_objects::{AccountInput, AccountProfile, AuthResponse, Identity};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{AccountRepository, CatalogRepository};
use crate::services::credential::CredentialHasher;
use crate::services::identity::IdentityVerifier;
use crate::services::token::TokenService;

use super::validation::validate_account_input;

/// Checked against when the username is unknown, so both login failures cost one verify.
const DECOY_PASSWORD: &str = "myflix-decoy-credential";

/// Entry point for every catalog and account operation
///
/// Read operations need a resolved identity. Account updates, deletion and
/// favorites additionally require the caller to be the target account, or an
/// admin.
pub struct AccessService<A, C>
where
    A: AccountRepository,
    C: CatalogRepository,
{
    accounts: Arc<A>,
    catalog: Arc<C>,
    identity: IdentityVerifier<A>,
    tokens: Arc<TokenService>,
    hasher: Arc<dyn CredentialHasher>,
    decoy_digest: OnceCell<String>,
}

impl<A, C> AccessService<A, C>
where
    A: AccountRepository,
    C: CatalogRepository,
{
    pub fn new(
        accounts: Arc<A>,
        catalog: Arc<C>,
        tokens: Arc<TokenService>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            identity: IdentityVerifier::new(tokens.clone(), accounts.clone()),
            accounts,
            catalog,
            tokens,
            hasher,
            decoy_digest: OnceCell::new(),
        }
    }

    /// Resolves the caller, collapsing every token failure into `Unauthorized`
    pub async fn authenticate(&self, bearer: Option<&str>) -> DomainResult<Identity> {
        match self.identity.resolve(bearer).await {
            Ok(identity) => Ok(identity),
            Err(DomainError::Token(reason)) => {
                tracing::warn!(reason = reason.reason(), "Bearer token rejected");
                Err(DomainError::Unauthorized)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn list_movies(&self, bearer: Option<&str>) -> DomainResult<Vec<Movie>> {
        self.authenticate(bearer).await?;
        self.catalog.find_all().await
    }

    pub async fn get_movie_by_title(&self, bearer: Option<&str>, title: &str) -> DomainResult<Movie> {
        self.authenticate(bearer).await?;
        self.catalog
            .find_by_title(title)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Movie '{}'", title)))
    }

    /// An empty result is reported as not found
    pub async fn list_movies_by_genre(
        &self,
        bearer: Option<&str>,
        genre_name: &str,
    ) -> DomainResult<Vec<Movie>> {
        self.authenticate(bearer).await?;
        let movies = self.catalog.find_by_genre(genre_name).await?;
        if movies.is_empty() {
            return Err(DomainError::not_found(format!("Movies in genre '{}'", genre_name)));
        }
        Ok(movies)
    }

    /// An empty result is reported as not found
    pub async fn list_movies_by_director(
        &self,
        bearer: Option<&str>,
        director_name: &str,
    ) -> DomainResult<Vec<Movie>> {
        self.authenticate(bearer).await?;
        let movies = self.catalog.find_by_director(director_name).await?;
        if movies.is_empty() {
            return Err(DomainError::not_found(format!(
                "Movies by director '{}'",
                director_name
            )));
        }
        Ok(movies)
    }

    /// Genre record embedded in the first movie of that genre
    pub async fn get_genre(&self, bearer: Option<&str>, name: &str) -> DomainResult<Genre> {
        self.authenticate(bearer).await?;
        self.catalog
            .find_first_by_genre(name)
            .await?
            .map(|movie| movie.genre)
            .ok_or_else(|| DomainError::not_found(format!("Genre '{}'", name)))
    }

    /// Director record embedded in the first movie by that director
    pub async fn get_director(&self, bearer: Option<&str>, name: &str) -> DomainResult<Director> {
        self.authenticate(bearer).await?;
        self.catalog
            .find_first_by_director(name)
            .await?
            .map(|movie| movie.director)
            .ok_or_else(|| DomainError::not_found(format!("Director '{}'", name)))
    }

    pub async fn list_accounts(&self, bearer: Option<&str>) -> DomainResult<Vec<AccountProfile>> {
        self.authenticate(bearer).await?;
        let accounts = self.accounts.find_all().await?;
        Ok(accounts.iter().map(AccountProfile::from).collect())
    }

    pub async fn get_account(
        &self,
        bearer: Option<&str>,
        username: &str,
    ) -> DomainResult<AccountProfile> {
        self.authenticate(bearer).await?;
        self.find_account(username).await.map(AccountProfile::from)
    }

    /// Creates a member account. No identity needed.
    pub async fn register(&self, input: AccountInput) -> DomainResult<AccountProfile> {
        validate_account_input(&input).into_result()?;

        if self.accounts.exists_by_username(&input.username).await? {
            tracing::warn!(username = %input.username, "Registration rejected: username taken");
            return Err(username_conflict(&input.username));
        }

        let password_hash = self.hasher.hash(&input.password)?;
        let account = Account::new(input.username, password_hash, input.email, input.birthday);

        // The store re-checks uniqueness atomically, so a racing duplicate
        // still ends in Conflict here.
        let account = self.accounts.create(account).await?;
        tracing::info!(account_id = %account.id, username = %account.username, "Account registered");

        Ok(account.profile())
    }

    /// Exchanges a username and password for a bearer token
    ///
    /// Unknown usernames and wrong passwords fail the same way.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResponse> {
        let account = match self.accounts.find_by_username(username).await? {
            Some(account) => account,
            None => {
                self.verify_against_decoy(password);
                tracing::warn!(username = %username, "Login failed: unknown username");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.hasher.verify(password, &account.password_hash)? {
            tracing::warn!(username = %username, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let issued = self
            .tokens
            .issue(&account)
            .map_err(|e| DomainError::internal(e.to_string()))?;
        tracing::info!(account_id = %account.id, "Login succeeded");

        Ok(AuthResponse::new(account.profile(), issued.token, issued.expires_in))
    }

    /// Replaces every mutable field of the account named `username`
    pub async fn update_account(
        &self,
        bearer: Option<&str>,
        username: &str,
        input: AccountInput,
    ) -> DomainResult<AccountProfile> {
        let identity = self.authenticate(bearer).await?;
        validate_account_input(&input).into_result()?;

        let target = self.find_account(username).await?;
        self.authorize(&identity, &target, "update")?;

        if input.username != target.username
            && self.accounts.exists_by_username(&input.username).await?
        {
            tracing::warn!(username = %input.username, "Update rejected: username taken");
            return Err(username_conflict(&input.username));
        }

        let changes = AccountChanges {
            username: input.username,
            password_hash: self.hasher.hash(&input.password)?,
            email: input.email,
            birthday: input.birthday,
        };

        let updated = self
            .accounts
            .replace(target.id, changes)
            .await?
            .ok_or_else(|| account_not_found(username))?;
        tracing::info!(account_id = %updated.id, "Account updated");

        Ok(updated.profile())
    }

    /// Deletes the account named `username` and returns the deleted username
    pub async fn delete_account(&self, bearer: Option<&str>, username: &str) -> DomainResult<String> {
        let identity = self.authenticate(bearer).await?;
        let target = self.find_account(username).await?;
        self.authorize(&identity, &target, "delete")?;

        if !self.accounts.delete(target.id).await? {
            return Err(account_not_found(username));
        }
        tracing::info!(account_id = %target.id, username = %target.username, "Account deleted");

        Ok(target.username)
    }

    /// Adds a catalog movie to the favorites of `username`; re-adding is a no-op
    pub async fn add_favorite(
        &self,
        bearer: Option<&str>,
        username: &str,
        movie_id: &str,
    ) -> DomainResult<AccountProfile> {
        let identity = self.authenticate(bearer).await?;
        let target = self.find_account(username).await?;
        self.authorize(&identity, &target, "add a favorite for")?;

        if !self.catalog.exists(movie_id).await? {
            return Err(DomainError::not_found(format!(
                "Movie '{}' in catalog",
                movie_id
            )));
        }

        self.accounts
            .add_favorite(target.id, movie_id)
            .await?
            .map(AccountProfile::from)
            .ok_or_else(|| account_not_found(username))
    }

    /// Removes a movie from the favorites of `username`; absent ids are a no-op
    pub async fn remove_favorite(
        &self,
        bearer: Option<&str>,
        username: &str,
        movie_id: &str,
    ) -> DomainResult<AccountProfile> {
        let identity = self.authenticate(bearer).await?;
        let target = self.find_account(username).await?;
        self.authorize(&identity, &target, "remove a favorite for")?;

        self.accounts
            .remove_favorite(target.id, movie_id)
            .await?
            .map(AccountProfile::from)
            .ok_or_else(|| account_not_found(username))
    }

    async fn find_account(&self, username: &str) -> DomainResult<Account> {
        self.accounts
            .find_by_username(username)
            .await?
            .ok_or_else(|| account_not_found(username))
    }

    fn verify_against_decoy(&self, password: &str) {
        let digest = match self
            .decoy_digest
            .get_or_try_init(|| self.hasher.hash(DECOY_PASSWORD))
        {
            Ok(digest) => digest,
            Err(e) => {
                tracing::warn!(error = %e, "Decoy digest unavailable");
                return;
            }
        };
        let _ = self.hasher.verify(password, digest);
    }

    fn authorize(&self, identity: &Identity, target: &Account, action: &str) -> DomainResult<()> {
        if identity.can_act_on(target) {
            return Ok(());
        }

        tracing::warn!(
            caller = %identity.username,
            target = %target.username,
            action,
            "Access denied"
        );
        Err(DomainError::Forbidden {
            message: format!("Not allowed to {} account '{}'", action, target.username),
        })
    }
}

fn account_not_found(username: &str) -> DomainError {
    DomainError::not_found(format!("User '{}'", username))
}

fn username_conflict(username: &str) -> DomainError {
    DomainError::Conflict {
        message: format!("Username {} already exists", username),
    }
}
