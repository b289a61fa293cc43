use actix_web::{web, HttpResponse};

use super::AppState;
use crate::dto::LoginRequest;
use crate::handlers::handle_domain_error;
use mf_core::repositories::{AccountRepository, CatalogRepository};

/// Handler for POST /login
///
/// Exchanges `{ "username", "password" }` for
/// `{ "user", "token", "token_type": "Bearer", "expires_in" }`.
pub async fn login<A, C>(
    state: web::Data<AppState<A, C>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    let (username, password) = match request.into_inner().into_credentials() {
        Ok(credentials) => credentials,
        Err(e) => return handle_domain_error(e),
    };

    match state.access.login(&username, &password).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => handle_domain_error(e),
    }
}
