//! Handlers for customer endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::customer::{CustomerResponse, SaveCustomerRequest};
use crate::api::handlers::parse_id;
use crate::domain::entities::NewCustomer;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all customers.
///
/// # Endpoint
///
/// `GET /api/customers`
pub async fn list_customers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = state.customer_service.list().await?;

    Ok(Json(customers.iter().map(CustomerResponse::from).collect()))
}

/// Returns a single customer.
///
/// # Endpoint
///
/// `GET /api/customers/{id}`
pub async fn get_customer_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let id = parse_id(&id)?;
    let customer = state.customer_service.get(id).await?;

    Ok(Json(CustomerResponse::from(&customer)))
}

/// Registers a customer.
///
/// # Endpoint
///
/// `POST /api/customers` (auth required)
pub async fn create_customer_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    payload.validate()?;

    let customer = state
        .customer_service
        .create(NewCustomer {
            name: payload.name,
            phone: payload.phone,
            is_gold: payload.is_gold,
        })
        .await?;

    Ok(Json(CustomerResponse::from(&customer)))
}

/// Replaces a customer's fields.
///
/// # Endpoint
///
/// `PUT /api/customers/{id}` (auth required)
pub async fn update_customer_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SaveCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    payload.validate()?;

    let id = parse_id(&id)?;
    let customer = state
        .customer_service
        .update(
            id,
            NewCustomer {
                name: payload.name,
                phone: payload.phone,
                is_gold: payload.is_gold,
            },
        )
        .await?;

    Ok(Json(CustomerResponse::from(&customer)))
}

/// Deletes a customer and returns it.
///
/// # Endpoint
///
/// `DELETE /api/customers/{id}` (auth + admin required)
pub async fn delete_customer_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let id = parse_id(&id)?;
    let customer = state.customer_service.delete(id).await?;

    Ok(Json(CustomerResponse::from(&customer)))
}
