//! Customer entity.

/// A registered rental customer.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    /// Gold members are eligible for promotional pricing handled upstream.
    pub is_gold: bool,
}

impl Customer {
    /// Creates a new Customer instance.
    pub fn new(id: i64, name: String, phone: String, is_gold: bool) -> Self {
        Self {
            id,
            name,
            phone,
            is_gold,
        }
    }
}

/// Input data for creating a customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub is_gold: bool,
}
