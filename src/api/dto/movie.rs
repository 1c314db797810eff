//! DTOs for movie endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::genre::GenreResponse;
use crate::domain::entities::Movie;

/// Request to create or replace a movie.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveMovieRequest {
    #[validate(length(min = 5, max = 255))]
    pub title: String,

    pub genre_id: i64,

    #[validate(range(min = 0.0, max = 255.0))]
    pub daily_rental_rate: f64,

    #[validate(range(min = 0, max = 255))]
    pub number_in_stock: i32,
}

/// Movie as exposed over the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub genre: GenreResponse,
    pub daily_rental_rate: f64,
    pub number_in_stock: i32,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            genre: GenreResponse::from(&movie.genre),
            daily_rental_rate: movie.daily_rental_rate,
            number_in_stock: movie.number_in_stock,
        }
    }
}
