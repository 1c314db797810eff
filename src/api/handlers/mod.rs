//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod customers;
pub mod genres;
pub mod health;
pub mod movies;
pub mod rentals;
pub mod returns;

pub use customers::{
    create_customer_handler, delete_customer_handler, get_customer_handler,
    list_customers_handler, update_customer_handler,
};
pub use genres::{
    create_genre_handler, delete_genre_handler, get_genre_handler, list_genres_handler,
    update_genre_handler,
};
pub use health::health_handler;
pub use movies::{
    create_movie_handler, delete_movie_handler, get_movie_handler, list_movies_handler,
    update_movie_handler,
};
pub use rentals::{create_rental_handler, list_rentals_handler};
pub use returns::returns_handler;

use crate::error::AppError;
use serde_json::json;

/// Parses a path id, treating malformed input the same as an unknown id.
///
/// A non-numeric id can never match a record, so it responds 404 rather
/// than 400.
pub(crate) fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::not_found("Record not found", json!({ "id": raw })))
}
