//! PostgreSQL implementation of rental repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;

use crate::domain::entities::{NewRental, Rental, RentalCustomer, RentalMovie};
use crate::domain::repositories::RentalRepository;
use crate::domain::settlement::Settlement;
use crate::error::AppError;

const RENTAL_COLUMNS: &str = "id, customer_id, customer_name, customer_phone, \
     movie_id, movie_title, movie_daily_rental_rate, date_out, date_returned, rental_fee";

/// PostgreSQL repository for rental storage, lookup, and settlement writes.
pub struct PgRentalRepository {
    pool: Arc<PgPool>,
}

impl PgRentalRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn rental_from_row(row: &PgRow) -> Result<Rental, sqlx::Error> {
    Ok(Rental {
        id: row.try_get("id")?,
        customer: RentalCustomer {
            id: row.try_get("customer_id")?,
            name: row.try_get("customer_name")?,
            phone: row.try_get("customer_phone")?,
        },
        movie: RentalMovie {
            id: row.try_get("movie_id")?,
            title: row.try_get("movie_title")?,
            daily_rental_rate: row.try_get("movie_daily_rental_rate")?,
        },
        date_out: row.try_get("date_out")?,
        date_returned: row.try_get("date_returned")?,
        rental_fee: row.try_get("rental_fee")?,
    })
}

#[async_trait]
impl RentalRepository for PgRentalRepository {
    async fn create(&self, new_rental: NewRental) -> Result<Rental, AppError> {
        let sql = format!(
            "INSERT INTO rentals (customer_id, customer_name, customer_phone, \
             movie_id, movie_title, movie_daily_rental_rate, date_out) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {RENTAL_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(new_rental.customer.id)
            .bind(&new_rental.customer.name)
            .bind(&new_rental.customer.phone)
            .bind(new_rental.movie.id)
            .bind(&new_rental.movie.title)
            .bind(new_rental.movie.daily_rental_rate)
            .bind(new_rental.date_out)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(rental_from_row(&row)?)
    }

    async fn find_by_customer_and_movie(
        &self,
        customer_id: i64,
        movie_id: i64,
    ) -> Result<Option<Rental>, AppError> {
        let sql = format!(
            "SELECT {RENTAL_COLUMNS} FROM rentals \
             WHERE customer_id = $1 AND movie_id = $2 \
             ORDER BY date_out DESC LIMIT 1"
        );
        let row = sqlx::query(&sql)
            .bind(customer_id)
            .bind(movie_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| rental_from_row(&r))
            .transpose()
            .map_err(Into::into)
    }

    async fn list(&self) -> Result<Vec<Rental>, AppError> {
        let sql = format!("SELECT {RENTAL_COLUMNS} FROM rentals ORDER BY date_out DESC");
        let rows = sqlx::query(&sql).fetch_all(self.pool.as_ref()).await?;

        rows.iter()
            .map(rental_from_row)
            .collect::<Result<_, _>>()
            .map_err(Into::into)
    }

    async fn settle(&self, rental_id: i64, settlement: Settlement) -> Result<Rental, AppError> {
        // `date_returned IS NULL` makes the settle write first-wins under
        // concurrent returns of the same rental.
        let sql = format!(
            "UPDATE rentals SET date_returned = $2, rental_fee = $3 \
             WHERE id = $1 AND date_returned IS NULL RETURNING {RENTAL_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(rental_id)
            .bind(settlement.date_returned)
            .bind(settlement.rental_fee)
            .fetch_optional(self.pool.as_ref())
            .await?;

        match row {
            Some(r) => Ok(rental_from_row(&r)?),
            None => Err(AppError::already_processed(
                "Return already processed",
                json!({ "rental_id": rental_id }),
            )),
        }
    }
}
