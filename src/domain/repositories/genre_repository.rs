//! Repository trait for genre data access.

use crate::domain::entities::{Genre, NewGenre};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing genres.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgGenreRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Creates a new genre.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_genre: NewGenre) -> Result<Genre, AppError>;

    /// Finds a genre by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError>;

    /// Lists all genres sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Genre>, AppError>;

    /// Replaces the name of an existing genre.
    ///
    /// Returns the updated genre, or `Ok(None)` if no genre matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, name: String) -> Result<Option<Genre>, AppError>;

    /// Deletes a genre.
    ///
    /// Returns the deleted genre, or `Ok(None)` if no genre matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<Option<Genre>, AppError>;
}
