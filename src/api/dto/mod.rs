//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization (camelCase on
//! the wire) and validator for input validation.

pub mod customer;
pub mod genre;
pub mod health;
pub mod movie;
pub mod rental;
pub mod returns;
