//! Return settlement orchestration.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::Rental;
use crate::domain::repositories::{MovieRepository, RentalRepository};
use crate::domain::settlement;
use crate::error::AppError;

/// Service for processing movie returns.
///
/// Sequences the settlement flow: open-rental lookup, the pure
/// [`settlement::settle`] computation, the guarded rental update, and the
/// stock increment. The rental update and the stock write are not wrapped
/// in a transaction; if the increment fails after the rental is settled the
/// discrepancy is logged and left for reconciliation.
pub struct ReturnService {
    rentals: Arc<dyn RentalRepository>,
    movies: Arc<dyn MovieRepository>,
}

impl ReturnService {
    /// Creates a new return service.
    pub fn new(rentals: Arc<dyn RentalRepository>, movies: Arc<dyn MovieRepository>) -> Self {
        Self { rentals, movies }
    }

    /// Settles the rental of `movie_id` by `customer_id` at the current time.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no rental exists for the pair
    /// - [`AppError::AlreadyProcessed`] if the rental was already returned
    pub async fn process(&self, customer_id: i64, movie_id: i64) -> Result<Rental, AppError> {
        let rental = self
            .rentals
            .find_by_customer_and_movie(customer_id, movie_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Rental not found",
                    json!({ "customer_id": customer_id, "movie_id": movie_id }),
                )
            })?;

        let settlement = settlement::settle(&rental, Utc::now())?;

        let settled = self.rentals.settle(rental.id, settlement).await?;

        let adjusted = self.movies.adjust_stock(movie_id, 1).await?;
        if !adjusted {
            tracing::warn!(
                movie_id,
                rental_id = settled.id,
                "stock increment skipped: movie no longer exists"
            );
        }

        Ok(settled)
    }
}
