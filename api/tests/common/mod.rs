//! Shared setup for API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{http::header, test::TestRequest, web};
use serde_json::json;

use mf_api::AppState;
use mf_core::domain::entities::{AccountRole, Director, Genre, Movie};
use mf_core::repositories::{AccountRepository, InMemoryAccountRepository, InMemoryCatalogRepository};
use mf_core::services::credential::{BcryptHasher, MIN_BCRYPT_COST};
use mf_core::services::token::{TokenService, TokenServiceConfig};
use mf_core::services::AccessService;
use mf_shared::AppConfig;

pub type TestState = web::Data<AppState<InMemoryAccountRepository, InMemoryCatalogRepository>>;

pub struct TestContext {
    pub state: TestState,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub config: AppConfig,
}

pub fn movie(id: &str, title: &str, genre: &str, director: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("About {}", title),
        genre: Genre {
            name: genre.to_string(),
            description: format!("{} films", genre),
        },
        director: Director {
            name: director.to_string(),
            bio: format!("{} biography", director),
            birth_year: Some(1970),
            death_year: None,
        },
        image_path: format!("images/{}.jpg", id),
        featured: false,
    }
}

pub fn catalog() -> Vec<Movie> {
    vec![
        movie("m1", "Inception", "Science Fiction", "Christopher Nolan"),
        movie("m2", "Interstellar", "Science Fiction", "Christopher Nolan"),
        movie("m3", "The Godfather", "Crime", "Francis Ford Coppola"),
    ]
}

/// Fresh in-memory stores seeded with [`catalog`]
pub fn context() -> TestContext {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let catalog = Arc::new(InMemoryCatalogRepository::with_movies(catalog()));
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));
    let hasher = Arc::new(BcryptHasher::new(MIN_BCRYPT_COST));

    let access = AccessService::new(accounts.clone(), catalog, tokens, hasher);

    TestContext {
        state: web::Data::new(AppState::new(access)),
        accounts,
        config: AppConfig::development(),
    }
}

impl TestContext {
    pub async fn promote_to_admin(&self, username: &str) {
        let mut account = self
            .accounts
            .find_by_username(username)
            .await
            .unwrap()
            .unwrap();
        self.accounts.delete(account.id).await.unwrap();
        account.role = AccountRole::Admin;
        self.accounts.create(account).await.unwrap();
    }
}

pub fn register_request(username: &str, password: &str) -> TestRequest {
    TestRequest::post().uri("/users").set_json(json!({
        "username": username,
        "password": password,
        "email": format!("{}@example.com", username),
    }))
}

pub fn login_request(username: &str, password: &str) -> TestRequest {
    TestRequest::post().uri("/login").set_json(json!({
        "username": username,
        "password": password,
    }))
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Registers `username` and returns its bearer token
macro_rules! register_and_login {
    ($app:expr, $username:expr, $password:expr) => {{
        let resp = actix_web::test::call_service(
            $app,
            common::register_request($username, $password).to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let body: serde_json::Value = actix_web::test::call_and_read_body_json(
            $app,
            common::login_request($username, $password).to_request(),
        )
        .await;
        body["token"].as_str().unwrap().to_string()
    }};
}
