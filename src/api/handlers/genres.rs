//! Handlers for genre endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::genre::{GenreResponse, SaveGenreRequest};
use crate::api::handlers::parse_id;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all genres.
///
/// # Endpoint
///
/// `GET /api/genres`
pub async fn list_genres_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<GenreResponse>>, AppError> {
    let genres = state.genre_service.list().await?;

    Ok(Json(genres.iter().map(GenreResponse::from).collect()))
}

/// Returns a single genre.
///
/// # Endpoint
///
/// `GET /api/genres/{id}`
///
/// # Errors
///
/// Returns 404 if the id is malformed or no genre matches.
pub async fn get_genre_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GenreResponse>, AppError> {
    let id = parse_id(&id)?;
    let genre = state.genre_service.get(id).await?;

    Ok(Json(GenreResponse::from(&genre)))
}

/// Creates a genre.
///
/// # Endpoint
///
/// `POST /api/genres` (auth required)
///
/// # Errors
///
/// Returns 400 on validation failure, 409 if the name is taken.
pub async fn create_genre_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveGenreRequest>,
) -> Result<Json<GenreResponse>, AppError> {
    payload.validate()?;

    let genre = state.genre_service.create(payload.name).await?;

    Ok(Json(GenreResponse::from(&genre)))
}

/// Renames a genre.
///
/// # Endpoint
///
/// `PUT /api/genres/{id}` (auth required)
pub async fn update_genre_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SaveGenreRequest>,
) -> Result<Json<GenreResponse>, AppError> {
    payload.validate()?;

    let id = parse_id(&id)?;
    let genre = state.genre_service.update(id, payload.name).await?;

    Ok(Json(GenreResponse::from(&genre)))
}

/// Deletes a genre and returns it.
///
/// # Endpoint
///
/// `DELETE /api/genres/{id}` (auth + admin required)
pub async fn delete_genre_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GenreResponse>, AppError> {
    let id = parse_id(&id)?;
    let genre = state.genre_service.delete(id).await?;

    Ok(Json(GenreResponse::from(&genre)))
}
