//! Repository trait for rental data access.

use crate::domain::entities::{NewRental, Rental};
use crate::domain::settlement::Settlement;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing rentals.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRentalRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Creates a new rental from checkout snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_rental: NewRental) -> Result<Rental, AppError>;

    /// Finds the most recent rental for a customer/movie pair, open or not.
    ///
    /// The caller decides whether an already-settled rental is an error; the
    /// lookup itself does not filter on `date_returned` so a double return
    /// can be distinguished from a rental that never existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_customer_and_movie(
        &self,
        customer_id: i64,
        movie_id: i64,
    ) -> Result<Option<Rental>, AppError>;

    /// Lists all rentals, most recent checkout first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Rental>, AppError>;

    /// Writes the settlement fields onto an open rental.
    ///
    /// The update is guarded with `date_returned IS NULL` so that two
    /// concurrent returns of the same rental cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyProcessed`] if the rental was settled in
    /// the meantime (guard matched no row).
    /// Returns [`AppError::Internal`] on database errors.
    async fn settle(&self, rental_id: i64, settlement: Settlement) -> Result<Rental, AppError>;
}
