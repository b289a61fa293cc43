use actix_web::{web, HttpResponse};

use super::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::BearerToken;
use mf_core::repositories::{AccountRepository, CatalogRepository};

/// POST /users/{username}/movies/{movie_id}
///
/// Adding a movie that is already a favorite succeeds without change.
pub async fn add_favorite<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    path: web::Path<(String, String)>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    let (username, movie_id) = path.into_inner();

    match state
        .access
        .add_favorite(bearer.as_deref(), &username, &movie_id)
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /users/{username}/movies/{movie_id}
pub async fn remove_favorite<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    path: web::Path<(String, String)>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    let (username, movie_id) = path.into_inner();

    match state
        .access
        .remove_favorite(bearer.as_deref(), &username, &movie_id)
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => handle_domain_error(e),
    }
}
