//! Catalog repository trait: lookup-only access to movies.

use async_trait::async_trait;

use crate::domain::entities::movie::Movie;
use crate::errors::DomainError;

/// Repository trait for read access to the movie catalog
///
/// Name matches are exact. List results keep the store's natural order, and
/// the `find_first_*` lookups return the first movie in that order.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Movie>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, DomainError>;

    /// Check whether a movie with this id is in the catalog
    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError>;

    async fn find_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, DomainError>;

    async fn find_by_director(&self, director_name: &str) -> Result<Vec<Movie>, DomainError>;

    /// First movie whose embedded genre has this name
    async fn find_first_by_genre(&self, genre_name: &str) -> Result<Option<Movie>, DomainError> {
        Ok(self.find_by_genre(genre_name).await?.into_iter().next())
    }

    /// First movie whose embedded director has this name
    async fn find_first_by_director(
        &self,
        director_name: &str,
    ) -> Result<Option<Movie>, DomainError> {
        Ok(self.find_by_director(director_name).await?.into_iter().next())
    }
}
