//! Catalog read endpoints. Every one requires a bearer token.

use actix_web::{web, HttpResponse};

use super::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::BearerToken;
use mf_core::repositories::{AccountRepository, CatalogRepository};

/// GET /movies
pub async fn list_movies<A, C>(state: web::Data<AppState<A, C>>, bearer: BearerToken) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    match state.access.list_movies(bearer.as_deref()).await {
        Ok(movies) => HttpResponse::Ok().json(movies),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /movies/{title}
pub async fn get_movie<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    title: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    match state.access.get_movie_by_title(bearer.as_deref(), &title).await {
        Ok(movie) => HttpResponse::Ok().json(movie),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /movies/genre/{genre_name}
pub async fn list_by_genre<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    genre_name: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    match state.access.list_movies_by_genre(bearer.as_deref(), &genre_name).await {
        Ok(movies) => HttpResponse::Ok().json(movies),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /movies/directors/{director_name}
pub async fn list_by_director<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    director_name: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    match state
        .access
        .list_movies_by_director(bearer.as_deref(), &director_name)
        .await
    {
        Ok(movies) => HttpResponse::Ok().json(movies),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /genres/{name}
pub async fn get_genre<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    name: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    match state.access.get_genre(bearer.as_deref(), &name).await {
        Ok(genre) => HttpResponse::Ok().json(genre),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /directors/{name}
pub async fn get_director<A, C>(
    state: web::Data<AppState<A, C>>,
    bearer: BearerToken,
    name: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    match state.access.get_director(bearer.as_deref(), &name).await {
        Ok(director) => HttpResponse::Ok().json(director),
        Err(e) => handle_domain_error(e),
    }
}
