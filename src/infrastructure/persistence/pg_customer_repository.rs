//! PostgreSQL implementation of customer repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// PostgreSQL repository for customer storage and retrieval.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn customer_from_row(row: &PgRow) -> Result<Customer, sqlx::Error> {
    Ok(Customer::new(
        row.try_get("id")?,
        row.try_get("name")?,
        row.try_get("phone")?,
        row.try_get("is_gold")?,
    ))
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let row = sqlx::query(
            "INSERT INTO customers (name, phone, is_gold) VALUES ($1, $2, $3) \
             RETURNING id, name, phone, is_gold",
        )
        .bind(&new_customer.name)
        .bind(&new_customer.phone)
        .bind(new_customer.is_gold)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(customer_from_row(&row)?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query("SELECT id, name, phone, is_gold FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| customer_from_row(&r))
            .transpose()
            .map_err(Into::into)
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query("SELECT id, name, phone, is_gold FROM customers ORDER BY name")
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter()
            .map(customer_from_row)
            .collect::<Result<_, _>>()
            .map_err(Into::into)
    }

    async fn update(&self, id: i64, update: NewCustomer) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query(
            "UPDATE customers SET name = $2, phone = $3, is_gold = $4 WHERE id = $1 \
             RETURNING id, name, phone, is_gold",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.phone)
        .bind(update.is_gold)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(|r| customer_from_row(&r))
            .transpose()
            .map_err(Into::into)
    }

    async fn delete(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query(
            "DELETE FROM customers WHERE id = $1 RETURNING id, name, phone, is_gold",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(|r| customer_from_row(&r))
            .transpose()
            .map_err(Into::into)
    }
}
