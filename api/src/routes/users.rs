//! Account endpoints
//!
//! Registration is open. Everything else needs a bearer token, and
//! updates and deletes are limited to the account itself unless the caller
//! is an admin.

use actix_web::{web, HttpResponse};

use super::AppState;
use crate::dto::AccountRequest;
use crate::handlers::handle_domain_error;
use crate::middleware::BearerToken;
use mf_core::repositories::{AccountRepository, CatalogRepository};
use mf_shared::MessageResponse;

/// GET /users
pub async fn list_users<A, C>(state: web::Data<AppState<A, C>>, bearer: BearerToken) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    match state.access.list_accounts(bearer.as_deref()).await {
        Ok(accounts) => HttpResponse::Ok().json(accounts),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /users/{username}
pub async fn get_user<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    username: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    match state.access.get_account(bearer.as_deref(), &username).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /users
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice1",
///     "password": "secret",
///     "email": "a@x.com",
///     "birthday": "1990-04-01"
/// }
/// ```
///
/// Responds 201 with the profile; the password hash is never returned.
pub async fn register<A, C>(
    state: web::Data<AppState<A, C>>,
    request: web::Json<AccountRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    let input = match request.into_inner().into_input() {
        Ok(input) => input,
        Err(e) => return handle_domain_error(e),
    };

    match state.access.register(input).await {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(e) => handle_domain_error(e),
    }
}

/// PUT /users/{username}: full replacement of the account fields
pub async fn update_user<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    username: web::Path<String>,
    request: web::Json<AccountRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    let input = match request.into_inner().into_input() {
        Ok(input) => input,
        // an anonymous caller gets 401, not a hint about the body
        Err(e) => {
            return match state.access.authenticate(bearer.as_deref()).await {
                Ok(_) => handle_domain_error(e),
                Err(auth_error) => handle_domain_error(auth_error),
            }
        }
    };

    match state
        .access
        .update_account(bearer.as_deref(), &username, input)
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /users/{username}
pub async fn delete_user<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    username: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    match state.access.delete_account(bearer.as_deref(), &username).await {
        Ok(deleted) => {
            HttpResponse::Ok().json(MessageResponse::new(format!("{} was deleted.", deleted)))
        }
        Err(e) => handle_domain_error(e),
    }
}
