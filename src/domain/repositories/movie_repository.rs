//! Repository trait for movie data access.

use crate::domain::entities::{Movie, NewMovie, UpdateMovie};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing movies and their stock.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMovieRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Creates a new movie.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_movie: NewMovie) -> Result<Movie, AppError>;

    /// Finds a movie by id, with its genre joined in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError>;

    /// Lists all movies sorted by title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Movie>, AppError>;

    /// Replaces the mutable fields of an existing movie.
    ///
    /// Returns the updated movie, or `Ok(None)` if no movie matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateMovie) -> Result<Option<Movie>, AppError>;

    /// Deletes a movie.
    ///
    /// Returns the deleted movie, or `Ok(None)` if no movie matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<Option<Movie>, AppError>;

    /// Adjusts `number_in_stock` by `delta` (positive or negative).
    ///
    /// The write is guarded so stock never goes negative. Returns `Ok(true)`
    /// when a row was updated, `Ok(false)` when the movie does not exist or
    /// the guard rejected the adjustment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn adjust_stock(&self, id: i64, delta: i32) -> Result<bool, AppError>;

    /// Counts all movies. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
