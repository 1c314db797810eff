//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the
//! concepts of the movie rental service. Entities are plain data structures
//! without persistence logic.
//!
//! # Entity Types
//!
//! - [`Genre`] - A movie category
//! - [`Movie`] - A rentable title with pricing and stock
//! - [`Customer`] - A registered customer
//! - [`Rental`] - A checkout, closed once by return settlement
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewGenre`, `NewMovie`, `NewCustomer`, `NewRental` for creating records,
//! `UpdateMovie` for full replacement updates.

pub mod customer;
pub mod genre;
pub mod movie;
pub mod rental;

pub use customer::{Customer, NewCustomer};
pub use genre::{Genre, NewGenre};
pub use movie::{Movie, NewMovie, UpdateMovie};
pub use rental::{NewRental, Rental, RentalCustomer, RentalMovie};
