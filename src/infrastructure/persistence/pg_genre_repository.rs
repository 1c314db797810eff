//! PostgreSQL implementation of genre repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;

use crate::domain::entities::{Genre, NewGenre};
use crate::domain::repositories::GenreRepository;
use crate::error::AppError;

/// PostgreSQL repository for genre storage and retrieval.
pub struct PgGenreRepository {
    pool: Arc<PgPool>,
}

impl PgGenreRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn genre_from_row(row: &PgRow) -> Result<Genre, sqlx::Error> {
    Ok(Genre::new(row.try_get("id")?, row.try_get("name")?))
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    async fn create(&self, new_genre: NewGenre) -> Result<Genre, AppError> {
        let row = sqlx::query("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
            .bind(&new_genre.name)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(genre_from_row(&row)?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError> {
        let row = sqlx::query("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| genre_from_row(&r)).transpose().map_err(Into::into)
    }

    async fn list(&self) -> Result<Vec<Genre>, AppError> {
        let rows = sqlx::query("SELECT id, name FROM genres ORDER BY name")
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter()
            .map(genre_from_row)
            .collect::<Result<_, _>>()
            .map_err(Into::into)
    }

    async fn update(&self, id: i64, name: String) -> Result<Option<Genre>, AppError> {
        let row = sqlx::query("UPDATE genres SET name = $2 WHERE id = $1 RETURNING id, name")
            .bind(id)
            .bind(&name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| genre_from_row(&r)).transpose().map_err(Into::into)
    }

    async fn delete(&self, id: i64) -> Result<Option<Genre>, AppError> {
        let row = sqlx::query("DELETE FROM genres WHERE id = $1 RETURNING id, name")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| genre_from_row(&r)).transpose().map_err(Into::into)
    }
}
