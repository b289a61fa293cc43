//! Catalog entities: movies with their embedded genre and director records.

use serde::{Deserialize, Serialize};

/// Catalog item identifier
pub type MovieId = String;

/// Genre record embedded in every movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    pub description: String,
}

/// Director record embedded in every movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub name: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,

    /// `None` while the director is alive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
}

/// A catalog item. Read-only as far as account operations are concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub director: Director,

    #[serde(default)]
    pub image_path: String,

    #[serde(default)]
    pub featured: bool,
}

impl Movie {
    pub fn has_genre(&self, genre_name: &str) -> bool {
        self.genre.name == genre_name
    }

    pub fn has_director(&self, director_name: &str) -> bool {
        self.director.name == director_name
    }
}
