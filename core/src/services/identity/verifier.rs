use std::sync::Arc;

use crate::domain::value_objects::Identity;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::AccountRepository;
use crate::services::token::TokenService;

/// Turns an optional bearer token into the identity of a live account
///
/// Stateless apart from the store handle. Token failures come back as
/// `DomainError::Token` carrying the precise reason; store faults come back
/// as they are.
pub struct IdentityVerifier<A: AccountRepository> {
    tokens: Arc<TokenService>,
    accounts: Arc<A>,
}

impl<A: AccountRepository> IdentityVerifier<A> {
    pub fn new(tokens: Arc<TokenService>, accounts: Arc<A>) -> Self {
        Self { tokens, accounts }
    }

    pub async fn resolve(&self, bearer: Option<&str>) -> DomainResult<Identity> {
        let token = match bearer.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => return Err(TokenError::MissingCredential.into()),
        };

        let claims = self.tokens.verify(token)?;
        let account_id = claims
            .account_id()
            .map_err(|_| DomainError::Token(TokenError::MalformedToken))?;

        match self.accounts.find_by_id(account_id).await? {
            Some(account) => Ok(Identity::from(&account)),
            None => Err(TokenError::UnknownSubject.into()),
        }
    }
}
