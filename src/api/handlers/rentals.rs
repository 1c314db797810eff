//! Handlers for rental checkout endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::rental::{CreateRentalRequest, RentalResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all rentals, most recent first.
///
/// # Endpoint
///
/// `GET /api/rentals`
pub async fn list_rentals_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let rentals = state.rental_service.list().await?;

    Ok(Json(rentals.iter().map(RentalResponse::from).collect()))
}

/// Checks out a movie for a customer.
///
/// # Endpoint
///
/// `POST /api/rentals` (auth required)
///
/// # Errors
///
/// Returns 400 if either id is missing, the customer or movie is unknown,
/// or the movie is out of stock.
pub async fn create_rental_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRentalRequest>,
) -> Result<Json<RentalResponse>, AppError> {
    payload.validate()?;

    // validate(required) guarantees both are present.
    let customer_id = payload.customer_id.unwrap_or_default();
    let movie_id = payload.movie_id.unwrap_or_default();

    let rental = state.rental_service.checkout(customer_id, movie_id).await?;

    Ok(Json(RentalResponse::from(&rental)))
}
