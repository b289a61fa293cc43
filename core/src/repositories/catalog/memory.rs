//! In-memory implementation of CatalogRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::movie::Movie;
use crate::errors::DomainError;

use super::trait_::CatalogRepository;

/// Catalog kept in insertion order
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }

    /// Insert a movie, replacing any existing entry with the same id
    pub async fn upsert(&self, movie: Movie) {
        let mut movies = self.movies.write().await;
        match movies.iter_mut().find(|m| m.id == movie.id) {
            Some(existing) => *existing = movie,
            None => movies.push(movie),
        }
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, DomainError> {
        Ok(self.movies.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, DomainError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.title == title).cloned())
    }

    async fn find_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, DomainError> {
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .filter(|m| m.has_genre(genre_name))
            .cloned()
            .collect())
    }

    async fn find_by_director(&self, director_name: &str) -> Result<Vec<Movie>, DomainError> {
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .filter(|m| m.has_director(director_name))
            .cloned()
            .collect())
    }
}
