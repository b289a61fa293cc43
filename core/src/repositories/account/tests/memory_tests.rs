//! Unit tests for the in-memory account repository

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountChanges};
use crate::errors::DomainError;
use crate::repositories::account::{AccountRepository, InMemoryAccountRepository};

fn account(username: &str) -> Account {
    Account::new(
        username.to_string(),
        "digest".to_string(),
        format!("{}@example.com", username),
        None,
    )
}

fn changes(username: &str) -> AccountChanges {
    AccountChanges {
        username: username.to_string(),
        password_hash: "new-digest".to_string(),
        email: format!("{}@example.org", username),
        birthday: None,
    }
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("alice01")).await.unwrap();

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.unwrap().username, "alice01");

    let by_name = repo.find_by_username("alice01").await.unwrap();
    assert_eq!(by_name.unwrap().id, created.id);

    assert!(repo.exists_by_username("alice01").await.unwrap());
    assert!(!repo.exists_by_username("Alice01").await.unwrap());
}

#[tokio::test]
async fn test_create_duplicate_username_conflicts() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("alice01")).await.unwrap();

    let result = repo.create(account("alice01")).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_concurrent_creates_store_exactly_one() {
    let repo = Arc::new(InMemoryAccountRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.create(account("racer01")).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_find_all_sorted_by_username() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("charlie1")).await.unwrap();
    repo.create(account("alice01")).await.unwrap();
    repo.create(account("bobby01")).await.unwrap();

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.username)
        .collect();
    assert_eq!(names, vec!["alice01", "bobby01", "charlie1"]);
}

#[tokio::test]
async fn test_replace() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("alice01")).await.unwrap();

    let updated = repo
        .replace(created.id, changes("alice02"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.username, "alice02");
    assert_eq!(updated.password_hash, "new-digest");
    assert!(repo.find_by_username("alice01").await.unwrap().is_none());

    let missing = repo.replace(Uuid::new_v4(), changes("ghost01")).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_replace_to_taken_username_conflicts() {
    let repo = InMemoryAccountRepository::new();
    let alice = repo.create(account("alice01")).await.unwrap();
    repo.create(account("bobby01")).await.unwrap();

    let result = repo.replace(alice.id, changes("bobby01")).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));

    // Keeping one's own username is fine
    let same = repo.replace(alice.id, changes("alice01")).await.unwrap();
    assert!(same.is_some());
}

#[tokio::test]
async fn test_delete() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("alice01")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_favorites_set_semantics() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("alice01")).await.unwrap();

    repo.add_favorite(created.id, "m1").await.unwrap();
    let twice = repo.add_favorite(created.id, "m1").await.unwrap().unwrap();
    assert_eq!(twice.favorite_movies.len(), 1);

    let removed = repo.remove_favorite(created.id, "m9").await.unwrap().unwrap();
    assert_eq!(removed.favorite_movies.len(), 1);

    let removed = repo.remove_favorite(created.id, "m1").await.unwrap().unwrap();
    assert!(removed.favorite_movies.is_empty());

    assert!(repo.add_favorite(Uuid::new_v4(), "m1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_favorite_adds_are_not_lost() {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let created = repo.create(account("alice01")).await.unwrap();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let repo = repo.clone();
            let id = created.id;
            tokio::spawn(async move { repo.add_favorite(id, &format!("m{}", i)).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.favorite_movies.len(), 16);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_add_and_remove_leave_one_outcome() {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let id = repo.create(account("alice01")).await.unwrap().id;

    for _ in 0..200 {
        let adder = {
            let repo = repo.clone();
            tokio::spawn(async move { repo.add_favorite(id, "m1").await })
        };
        let remover = {
            let repo = repo.clone();
            tokio::spawn(async move { repo.remove_favorite(id, "m1").await })
        };
        let added = adder.await.unwrap().unwrap().unwrap();
        let removed = remover.await.unwrap().unwrap().unwrap();

        // each response reflects its own write
        assert!(added.has_favorite("m1"));
        assert!(!removed.has_favorite("m1"));

        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert!(stored.favorite_movies.len() <= 1);
        // whichever write landed second is what remains
        assert!(
            stored.favorite_movies == added.favorite_movies
                || stored.favorite_movies == removed.favorite_movies
        );
    }
}
