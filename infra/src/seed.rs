//! Catalog seeding from a JSON file
//!
//! The file holds a JSON array of movies in the same shape the API returns.
//! Seeding upserts by id, so running it twice leaves one copy of each movie.

use std::path::Path;

use mf_core::domain::entities::Movie;
use mf_core::repositories::InMemoryCatalogRepository;

use crate::InfrastructureError;

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<Movie>, InfrastructureError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        InfrastructureError::Seed(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_catalog(&raw)
}

/// Parse catalog JSON, rejecting duplicate ids
pub fn parse_catalog(raw: &str) -> Result<Vec<Movie>, InfrastructureError> {
    let movies: Vec<Movie> = serde_json::from_str(raw)?;

    let mut seen = std::collections::HashSet::new();
    if let Some(duplicate) = movies.iter().find(|m| !seen.insert(m.id.as_str())) {
        return Err(InfrastructureError::Seed(format!(
            "Duplicate movie id in catalog: {}",
            duplicate.id
        )));
    }

    Ok(movies)
}

/// Upsert every movie into an in-memory catalog
pub async fn seed_memory_catalog(catalog: &InMemoryCatalogRepository, movies: Vec<Movie>) -> usize {
    let count = movies.len();
    for movie in movies {
        catalog.upsert(movie).await;
    }
    tracing::info!(count, "Seeded in-memory catalog");
    count
}

/// Upsert every movie into the MySQL catalog
#[cfg(feature = "mysql")]
pub async fn seed_mysql_catalog(
    catalog: &crate::database::MySqlCatalogRepository,
    movies: &[Movie],
) -> Result<usize, InfrastructureError> {
    for movie in movies {
        catalog
            .upsert_movie(movie)
            .await
            .map_err(|e| InfrastructureError::Seed(e.to_string()))?;
    }
    tracing::info!(count = movies.len(), "Seeded MySQL catalog");
    Ok(movies.len())
}
