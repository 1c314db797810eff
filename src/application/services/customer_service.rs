//! Customer management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Service for customer CRUD operations.
pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    /// Creates a new customer service.
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    /// Registers a customer.
    pub async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        self.customers.create(new_customer).await
    }

    /// Lists all customers.
    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.customers.list().await
    }

    /// Retrieves a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer matches `id`.
    pub async fn get(&self, id: i64) -> Result<Customer, AppError> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| customer_not_found(id))
    }

    /// Replaces a customer's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer matches `id`.
    pub async fn update(&self, id: i64, update: NewCustomer) -> Result<Customer, AppError> {
        self.customers
            .update(id, update)
            .await?
            .ok_or_else(|| customer_not_found(id))
    }

    /// Deletes a customer and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer matches `id`.
    pub async fn delete(&self, id: i64) -> Result<Customer, AppError> {
        self.customers
            .delete(id)
            .await?
            .ok_or_else(|| customer_not_found(id))
    }
}

fn customer_not_found(id: i64) -> AppError {
    AppError::not_found("Customer not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCustomerRepository;

    #[tokio::test]
    async fn test_get_existing_customer() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|id| {
            Ok(Some(Customer::new(
                id,
                "John Smith".to_string(),
                "12345".to_string(),
                false,
            )))
        });

        let service = CustomerService::new(Arc::new(mock_repo));

        let customer = service.get(3).await.unwrap();
        assert_eq!(customer.id, 3);
    }

    #[tokio::test]
    async fn test_update_missing_customer() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service
            .update(
                99,
                NewCustomer {
                    name: "Jane Doe".to_string(),
                    phone: "55555".to_string(),
                    is_gold: true,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
