//! DTOs for customer endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Customer;

/// Request to register or replace a customer.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveCustomerRequest {
    #[validate(length(min = 5, max = 50))]
    pub name: String,

    #[validate(length(min = 5, max = 50))]
    pub phone: String,

    #[serde(default)]
    pub is_gold: bool,
}

/// Customer as exposed over the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub is_gold: bool,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            is_gold: customer.is_gold,
        }
    }
}
