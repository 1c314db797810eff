//! DTOs for the returns endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to return a rented movie.
///
/// Ids are optional at the serde level so a missing `customerId` or
/// `movieId` surfaces as a 400 validation error rather than a
/// body-deserialization reject.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    #[validate(required)]
    pub customer_id: Option<i64>,

    #[validate(required)]
    pub movie_id: Option<i64>,
}
