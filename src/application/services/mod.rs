//! Business logic services for the application layer.

pub mod auth_service;
pub mod customer_service;
pub mod genre_service;
pub mod movie_service;
pub mod rental_service;
pub mod return_service;

pub use auth_service::{AuthClaims, AuthService};
pub use customer_service::CustomerService;
pub use genre_service::GenreService;
pub use movie_service::MovieService;
pub use rental_service::RentalService;
pub use return_service::ReturnService;
