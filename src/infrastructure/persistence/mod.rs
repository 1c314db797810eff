//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound prepared statements.
//!
//! # Repositories
//!
//! - [`PgGenreRepository`] - Genre storage
//! - [`PgMovieRepository`] - Movie storage and stock adjustments
//! - [`PgCustomerRepository`] - Customer storage
//! - [`PgRentalRepository`] - Rental checkout, lookup, and settlement writes

pub mod pg_customer_repository;
pub mod pg_genre_repository;
pub mod pg_movie_repository;
pub mod pg_rental_repository;

pub use pg_customer_repository::PgCustomerRepository;
pub use pg_genre_repository::PgGenreRepository;
pub use pg_movie_repository::PgMovieRepository;
pub use pg_rental_repository::PgRentalRepository;
