//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::genre_service::GenreService`] - Genre management
//! - [`services::movie_service::MovieService`] - Movie catalog and stock
//! - [`services::customer_service::CustomerService`] - Customer management
//! - [`services::rental_service::RentalService`] - Movie checkout
//! - [`services::return_service::ReturnService`] - Return settlement
//! - [`services::auth_service::AuthService`] - JWT sign/verify

pub mod services;
