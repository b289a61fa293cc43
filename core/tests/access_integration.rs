//! Integration tests for the access service through the public crate API

use std::sync::Arc;

use mf_core::domain::entities::{Director, Genre, Movie};
use mf_core::domain::value_objects::AccountInput;
use mf_core::errors::DomainError;
use mf_core::repositories::{InMemoryAccountRepository, InMemoryCatalogRepository};
use mf_core::services::access::AccessService;
use mf_core::services::credential::{BcryptHasher, MIN_BCRYPT_COST};
use mf_core::services::token::{TokenService, TokenServiceConfig};

fn catalog() -> InMemoryCatalogRepository {
    InMemoryCatalogRepository::with_movies(vec![Movie {
        id: "m1".to_string(),
        title: "Inception".to_string(),
        description: "A thief who steals corporate secrets through dreams.".to_string(),
        genre: Genre {
            name: "Thriller".to_string(),
            description: "Suspenseful stories.".to_string(),
        },
        director: Director {
            name: "Christopher Nolan".to_string(),
            bio: "British-American filmmaker.".to_string(),
            birth_year: Some(1970),
            death_year: None,
        },
        image_path: "inception.png".to_string(),
        featured: true,
    }])
}

fn service() -> AccessService<InMemoryAccountRepository, InMemoryCatalogRepository> {
    AccessService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(catalog()),
        Arc::new(TokenService::new(TokenServiceConfig::default())),
        Arc::new(BcryptHasher::new(MIN_BCRYPT_COST)),
    )
}

#[tokio::test]
async fn test_account_lifecycle() {
    let service = service();

    service
        .register(AccountInput::new("alice01", "pw", "a@example.com", None))
        .await
        .unwrap();
    let token = service.login("alice01", "pw").await.unwrap().token;
    let bearer = Some(token.as_str());

    service.add_favorite(bearer, "alice01", "m1").await.unwrap();
    let profile = service.add_favorite(bearer, "alice01", "m1").await.unwrap();
    assert_eq!(profile.favorite_movies, vec!["m1".to_string()]);

    let profile = service.remove_favorite(bearer, "alice01", "m1").await.unwrap();
    assert!(profile.favorite_movies.is_empty());

    let deleted = service.delete_account(bearer, "alice01").await.unwrap();
    assert_eq!(deleted, "alice01");

    assert!(matches!(
        service.list_movies(bearer).await,
        Err(DomainError::Unauthorized)
    ));
}
