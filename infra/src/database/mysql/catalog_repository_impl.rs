//! MySQL implementation of the CatalogRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use mf_core::domain::entities::{Director, Genre, Movie};
use mf_core::errors::DomainError;
use mf_core::repositories::CatalogRepository;

const MOVIE_COLUMNS: &str = "id, title, description, genre_name, genre_description, \
    director_name, director_bio, director_birth_year, director_death_year, image_path, featured";

/// MySQL implementation of CatalogRepository
///
/// Genre and director records are stored inline on each movie row, matching
/// the embedded shape of [`Movie`]. Lists are ordered by insertion.
pub struct MySqlCatalogRepository {
    pool: MySqlPool,
}

impl MySqlCatalogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_movie(row: &sqlx::mysql::MySqlRow) -> Result<Movie, DomainError> {
        let get = |column: &str| -> Result<String, DomainError> {
            row.try_get::<String, _>(column).map_err(|e| DomainError::Internal {
                message: format!("Failed to get {}: {}", column, e),
            })
        };
        let get_year = |column: &str| -> Result<Option<i32>, DomainError> {
            row.try_get::<Option<i32>, _>(column).map_err(|e| DomainError::Internal {
                message: format!("Failed to get {}: {}", column, e),
            })
        };

        Ok(Movie {
            id: get("id")?,
            title: get("title")?,
            description: get("description")?,
            genre: Genre {
                name: get("genre_name")?,
                description: get("genre_description")?,
            },
            director: Director {
                name: get("director_name")?,
                bio: get("director_bio")?,
                birth_year: get_year("director_birth_year")?,
                death_year: get_year("director_death_year")?,
            },
            image_path: get("image_path")?,
            featured: row
                .try_get("featured")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get featured: {}", e) })?,
        })
    }

    async fn fetch_where(&self, filter: &str, value: &str) -> Result<Vec<Movie>, DomainError> {
        let query = format!(
            "SELECT {} FROM movies WHERE {} = ? ORDER BY seq",
            MOVIE_COLUMNS, filter
        );

        let rows = sqlx::query(&query)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to query movies: {}", e) })?;

        rows.iter().map(Self::row_to_movie).collect()
    }

    /// Insert or replace a movie by id. Used when seeding the catalog.
    pub async fn upsert_movie(&self, movie: &Movie) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO movies (
                id, title, description, genre_name, genre_description,
                director_name, director_bio, director_birth_year, director_death_year,
                image_path, featured
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                title = VALUES(title),
                description = VALUES(description),
                genre_name = VALUES(genre_name),
                genre_description = VALUES(genre_description),
                director_name = VALUES(director_name),
                director_bio = VALUES(director_bio),
                director_birth_year = VALUES(director_birth_year),
                director_death_year = VALUES(director_death_year),
                image_path = VALUES(image_path),
                featured = VALUES(featured)
        "#;

        sqlx::query(query)
            .bind(&movie.id)
            .bind(&movie.title)
            .bind(&movie.description)
            .bind(&movie.genre.name)
            .bind(&movie.genre.description)
            .bind(&movie.director.name)
            .bind(&movie.director.bio)
            .bind(movie.director.birth_year)
            .bind(movie.director.death_year)
            .bind(&movie.image_path)
            .bind(movie.featured)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to upsert movie: {}", e) })?;

        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for MySqlCatalogRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, DomainError> {
        let query = format!("SELECT {} FROM movies ORDER BY seq", MOVIE_COLUMNS);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to list movies: {}", e) })?;

        rows.iter().map(Self::row_to_movie).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, DomainError> {
        Ok(self.fetch_where("id", id).await?.into_iter().next())
    }

    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM movies WHERE id = ?) AS found")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to check movie: {}", e) })?;

        let found: i64 = row
            .try_get("found")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get existence result: {}", e) })?;
        Ok(found == 1)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError> {
        Ok(self.fetch_where("title", title).await?.into_iter().next())
    }

    async fn find_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, DomainError> {
        self.fetch_where("genre_name", genre_name).await
    }

    async fn find_by_director(&self, director_name: &str) -> Result<Vec<Movie>, DomainError> {
        self.fetch_where("director_name", director_name).await
    }
}
