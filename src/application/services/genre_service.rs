//! Genre management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Genre, NewGenre};
use crate::domain::repositories::GenreRepository;
use crate::error::AppError;

/// Service for genre CRUD operations.
pub struct GenreService {
    genres: Arc<dyn GenreRepository>,
}

impl GenreService {
    /// Creates a new genre service.
    pub fn new(genres: Arc<dyn GenreRepository>) -> Self {
        Self { genres }
    }

    /// Creates a genre.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is taken.
    pub async fn create(&self, name: String) -> Result<Genre, AppError> {
        self.genres.create(NewGenre { name }).await
    }

    /// Lists all genres.
    pub async fn list(&self) -> Result<Vec<Genre>, AppError> {
        self.genres.list().await
    }

    /// Retrieves a genre by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no genre matches `id`.
    pub async fn get(&self, id: i64) -> Result<Genre, AppError> {
        self.genres
            .find_by_id(id)
            .await?
            .ok_or_else(|| genre_not_found(id))
    }

    /// Renames a genre.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no genre matches `id`.
    pub async fn update(&self, id: i64, name: String) -> Result<Genre, AppError> {
        self.genres
            .update(id, name)
            .await?
            .ok_or_else(|| genre_not_found(id))
    }

    /// Deletes a genre and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no genre matches `id`.
    pub async fn delete(&self, id: i64) -> Result<Genre, AppError> {
        self.genres
            .delete(id)
            .await?
            .ok_or_else(|| genre_not_found(id))
    }
}

fn genre_not_found(id: i64) -> AppError {
    AppError::not_found("Genre not found", json!({ "id": id }))
}
