//! DTOs for rental endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Rental;

/// Request to check out a movie for a customer.
///
/// Ids are optional at the serde level so a missing field surfaces as a 400
/// validation error rather than a body-deserialization reject.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    #[validate(required)]
    pub customer_id: Option<i64>,

    #[validate(required)]
    pub movie_id: Option<i64>,
}

/// Customer snapshot embedded in rental responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCustomerResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

/// Movie snapshot embedded in rental responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalMovieResponse {
    pub id: i64,
    pub title: String,
    pub daily_rental_rate: f64,
}

/// Rental as exposed over the API.
///
/// `dateReturned` and `rentalFee` serialize as `null` while the rental is
/// open.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: i64,
    pub customer: RentalCustomerResponse,
    pub movie: RentalMovieResponse,
    pub date_out: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
    pub rental_fee: Option<f64>,
}

impl From<&Rental> for RentalResponse {
    fn from(rental: &Rental) -> Self {
        Self {
            id: rental.id,
            customer: RentalCustomerResponse {
                id: rental.customer.id,
                name: rental.customer.name.clone(),
                phone: rental.customer.phone.clone(),
            },
            movie: RentalMovieResponse {
                id: rental.movie.id,
                title: rental.movie.title.clone(),
                daily_rental_rate: rental.movie.daily_rental_rate,
            },
            date_out: rental.date_out,
            date_returned: rental.date_returned,
            rental_fee: rental.rental_fee,
        }
    }
}
