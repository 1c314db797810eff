//! Handlers for movie endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::movie::{MovieResponse, SaveMovieRequest};
use crate::api::handlers::parse_id;
use crate::domain::entities::{NewMovie, UpdateMovie};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all movies.
///
/// # Endpoint
///
/// `GET /api/movies`
pub async fn list_movies_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieResponse>>, AppError> {
    let movies = state.movie_service.list().await?;

    Ok(Json(movies.iter().map(MovieResponse::from).collect()))
}

/// Returns a single movie.
///
/// # Endpoint
///
/// `GET /api/movies/{id}`
///
/// # Errors
///
/// Returns 404 if the id is malformed or no movie matches.
pub async fn get_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieResponse>, AppError> {
    let id = parse_id(&id)?;
    let movie = state.movie_service.get(id).await?;

    Ok(Json(MovieResponse::from(&movie)))
}

/// Creates a movie.
///
/// # Endpoint
///
/// `POST /api/movies` (auth required)
///
/// # Errors
///
/// Returns 400 on validation failure or unknown genre.
pub async fn create_movie_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveMovieRequest>,
) -> Result<Json<MovieResponse>, AppError> {
    payload.validate()?;

    let movie = state
        .movie_service
        .create(NewMovie {
            title: payload.title,
            genre_id: payload.genre_id,
            daily_rental_rate: payload.daily_rental_rate,
            number_in_stock: payload.number_in_stock,
        })
        .await?;

    Ok(Json(MovieResponse::from(&movie)))
}

/// Replaces a movie's fields.
///
/// # Endpoint
///
/// `PUT /api/movies/{id}` (auth required)
pub async fn update_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SaveMovieRequest>,
) -> Result<Json<MovieResponse>, AppError> {
    payload.validate()?;

    let id = parse_id(&id)?;
    let movie = state
        .movie_service
        .update(
            id,
            UpdateMovie {
                title: payload.title,
                genre_id: payload.genre_id,
                daily_rental_rate: payload.daily_rental_rate,
                number_in_stock: payload.number_in_stock,
            },
        )
        .await?;

    Ok(Json(MovieResponse::from(&movie)))
}

/// Deletes a movie and returns it.
///
/// # Endpoint
///
/// `DELETE /api/movies/{id}` (auth + admin required)
pub async fn delete_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieResponse>, AppError> {
    let id = parse_id(&id)?;
    let movie = state.movie_service.delete(id).await?;

    Ok(Json(MovieResponse::from(&movie)))
}
