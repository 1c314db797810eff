//! DTOs for genre endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Genre;

/// Request to create or rename a genre.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveGenreRequest {
    #[validate(length(min = 5, max = 50))]
    pub name: String,
}

/// Genre as exposed over the API.
#[derive(Debug, Serialize)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
}

impl From<&Genre> for GenreResponse {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name.clone(),
        }
    }
}
