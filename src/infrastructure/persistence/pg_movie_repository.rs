//! PostgreSQL implementation of movie repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;

use crate::domain::entities::{Genre, Movie, NewMovie, UpdateMovie};
use crate::domain::repositories::MovieRepository;
use crate::error::AppError;

const MOVIE_COLUMNS: &str = "m.id, m.title, m.daily_rental_rate, m.number_in_stock, \
     g.id AS genre_id, g.name AS genre_name";

/// PostgreSQL repository for movie storage, retrieval, and stock updates.
pub struct PgMovieRepository {
    pool: Arc<PgPool>,
}

impl PgMovieRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Movie>, AppError> {
        let sql = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies m JOIN genres g ON g.id = m.genre_id \
             WHERE m.id = $1"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| movie_from_row(&r)).transpose().map_err(Into::into)
    }
}

fn movie_from_row(row: &PgRow) -> Result<Movie, sqlx::Error> {
    Ok(Movie::new(
        row.try_get("id")?,
        row.try_get("title")?,
        Genre::new(row.try_get("genre_id")?, row.try_get("genre_name")?),
        row.try_get("daily_rental_rate")?,
        row.try_get("number_in_stock")?,
    ))
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn create(&self, new_movie: NewMovie) -> Result<Movie, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO movies (title, genre_id, daily_rental_rate, number_in_stock) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&new_movie.title)
        .bind(new_movie.genre_id)
        .bind(new_movie.daily_rental_rate)
        .bind(new_movie.number_in_stock)
        .fetch_one(self.pool.as_ref())
        .await?;

        self.fetch_by_id(id).await?.ok_or_else(|| {
            AppError::internal("Movie vanished after insert", serde_json::json!({ "id": id }))
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError> {
        self.fetch_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let sql = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies m JOIN genres g ON g.id = m.genre_id \
             ORDER BY m.title"
        );
        let rows = sqlx::query(&sql).fetch_all(self.pool.as_ref()).await?;

        rows.iter()
            .map(movie_from_row)
            .collect::<Result<_, _>>()
            .map_err(Into::into)
    }

    async fn update(&self, id: i64, update: UpdateMovie) -> Result<Option<Movie>, AppError> {
        let updated = sqlx::query(
            "UPDATE movies SET title = $2, genre_id = $3, daily_rental_rate = $4, \
             number_in_stock = $5 WHERE id = $1",
        )
        .bind(id)
        .bind(&update.title)
        .bind(update.genre_id)
        .bind(update.daily_rental_rate)
        .bind(update.number_in_stock)
        .execute(self.pool.as_ref())
        .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        self.fetch_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<Option<Movie>, AppError> {
        let movie = self.fetch_by_id(id).await?;

        if movie.is_some() {
            sqlx::query("DELETE FROM movies WHERE id = $1")
                .bind(id)
                .execute(self.pool.as_ref())
                .await?;
        }

        Ok(movie)
    }

    async fn adjust_stock(&self, id: i64, delta: i32) -> Result<bool, AppError> {
        // The guard keeps stock non-negative even under concurrent checkouts.
        let updated = sqlx::query(
            "UPDATE movies SET number_in_stock = number_in_stock + $2 \
             WHERE id = $1 AND number_in_stock + $2 >= 0",
        )
        .bind(id)
        .bind(delta)
        .execute(self.pool.as_ref())
        .await?;

        Ok(updated.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
