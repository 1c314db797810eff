//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{
    AuthService, CustomerService, GenreService, MovieService, RentalService, ReturnService,
};

/// Application state holding the service layer.
///
/// Cloned per request by axum; services are shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub genre_service: Arc<GenreService>,
    pub movie_service: Arc<MovieService>,
    pub customer_service: Arc<CustomerService>,
    pub rental_service: Arc<RentalService>,
    pub return_service: Arc<ReturnService>,
    pub auth_service: Arc<AuthService>,
}
