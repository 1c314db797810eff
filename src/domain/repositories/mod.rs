//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`GenreRepository`] - Genre CRUD operations
//! - [`MovieRepository`] - Movie CRUD and stock adjustments
//! - [`CustomerRepository`] - Customer CRUD operations
//! - [`RentalRepository`] - Checkout, lookup, and settlement writes

pub mod customer_repository;
pub mod genre_repository;
pub mod movie_repository;
pub mod rental_repository;

pub use customer_repository::CustomerRepository;
pub use genre_repository::GenreRepository;
pub use movie_repository::MovieRepository;
pub use rental_repository::RentalRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use genre_repository::MockGenreRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
#[cfg(test)]
pub use rental_repository::MockRentalRepository;
