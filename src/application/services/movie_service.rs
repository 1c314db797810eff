//! Movie catalog service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Movie, NewMovie, UpdateMovie};
use crate::domain::repositories::{GenreRepository, MovieRepository};
use crate::error::AppError;

/// Service for movie CRUD operations.
///
/// Create and update validate that the referenced genre exists before
/// touching the movie row, so callers get a 400 instead of a foreign key
/// violation.
pub struct MovieService {
    movies: Arc<dyn MovieRepository>,
    genres: Arc<dyn GenreRepository>,
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(movies: Arc<dyn MovieRepository>, genres: Arc<dyn GenreRepository>) -> Self {
        Self { movies, genres }
    }

    /// Creates a movie.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the genre does not exist.
    pub async fn create(&self, new_movie: NewMovie) -> Result<Movie, AppError> {
        self.ensure_genre_exists(new_movie.genre_id).await?;
        self.movies.create(new_movie).await
    }

    /// Lists all movies.
    pub async fn list(&self) -> Result<Vec<Movie>, AppError> {
        self.movies.list().await
    }

    /// Retrieves a movie by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no movie matches `id`.
    pub async fn get(&self, id: i64) -> Result<Movie, AppError> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| movie_not_found(id))
    }

    /// Replaces a movie's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the genre does not exist.
    /// Returns [`AppError::NotFound`] if no movie matches `id`.
    pub async fn update(&self, id: i64, update: UpdateMovie) -> Result<Movie, AppError> {
        self.ensure_genre_exists(update.genre_id).await?;
        self.movies
            .update(id, update)
            .await?
            .ok_or_else(|| movie_not_found(id))
    }

    /// Deletes a movie and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no movie matches `id`.
    pub async fn delete(&self, id: i64) -> Result<Movie, AppError> {
        self.movies
            .delete(id)
            .await?
            .ok_or_else(|| movie_not_found(id))
    }

    /// Counts movies. Used by the health check.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.movies.count().await
    }

    async fn ensure_genre_exists(&self, genre_id: i64) -> Result<(), AppError> {
        if self.genres.find_by_id(genre_id).await?.is_none() {
            return Err(AppError::bad_request(
                "Invalid genre",
                json!({ "genre_id": genre_id }),
            ));
        }
        Ok(())
    }
}

fn movie_not_found(id: i64) -> AppError {
    AppError::not_found("Movie not found", json!({ "id": id }))
}
