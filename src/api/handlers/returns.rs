//! Handler for the returns endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::rental::RentalResponse;
use crate::api::dto::returns::ReturnRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Settles the return of a rented movie.
///
/// # Endpoint
///
/// `POST /api/returns` (auth required)
///
/// # Request Body
///
/// ```json
/// { "customerId": 10, "movieId": 20 }
/// ```
///
/// # Responses
///
/// - **200**: the settled rental, with `dateReturned` and `rentalFee` set
/// - **400**: missing `customerId`/`movieId`, or rental already processed
/// - **401**: missing or invalid `x-auth-token`
/// - **404**: no rental exists for the customer/movie pair
pub async fn returns_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReturnRequest>,
) -> Result<Json<RentalResponse>, AppError> {
    payload.validate()?;

    // validate(required) guarantees both are present.
    let customer_id = payload.customer_id.unwrap_or_default();
    let movie_id = payload.movie_id.unwrap_or_default();

    let rental = state.return_service.process(customer_id, movie_id).await?;

    Ok(Json(RentalResponse::from(&rental)))
}
