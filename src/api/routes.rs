//! API route configuration.
//!
//! Routes are split into three groups by the capability they require; the
//! top-level router in [`crate::routes`] layers authentication onto the
//! protected and admin groups before merging.

use crate::api::handlers::{
    create_customer_handler, create_genre_handler, create_movie_handler, create_rental_handler,
    delete_customer_handler, delete_genre_handler, delete_movie_handler, get_customer_handler,
    get_genre_handler, get_movie_handler, list_customers_handler, list_genres_handler,
    list_movies_handler, list_rentals_handler, returns_handler, update_customer_handler,
    update_genre_handler, update_movie_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Read-only routes, open to anonymous callers.
///
/// # Endpoints
///
/// - `GET /genres`, `GET /genres/{id}`
/// - `GET /movies`, `GET /movies/{id}`
/// - `GET /customers`, `GET /customers/{id}`
/// - `GET /rentals`
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(list_genres_handler))
        .route("/genres/{id}", get(get_genre_handler))
        .route("/movies", get(list_movies_handler))
        .route("/movies/{id}", get(get_movie_handler))
        .route("/customers", get(list_customers_handler))
        .route("/customers/{id}", get(get_customer_handler))
        .route("/rentals", get(list_rentals_handler))
}

/// Mutating routes requiring a valid `x-auth-token`.
///
/// # Endpoints
///
/// - `POST /genres`, `PUT /genres/{id}`
/// - `POST /movies`, `PUT /movies/{id}`
/// - `POST /customers`, `PUT /customers/{id}`
/// - `POST /rentals`  - checkout
/// - `POST /returns`  - return settlement
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", post(create_genre_handler))
        .route("/genres/{id}", put(update_genre_handler))
        .route("/movies", post(create_movie_handler))
        .route("/movies/{id}", put(update_movie_handler))
        .route("/customers", post(create_customer_handler))
        .route("/customers/{id}", put(update_customer_handler))
        .route("/rentals", post(create_rental_handler))
        .route("/returns", post(returns_handler))
}

/// Destructive routes requiring admin claims on top of authentication.
///
/// # Endpoints
///
/// - `DELETE /genres/{id}`
/// - `DELETE /movies/{id}`
/// - `DELETE /customers/{id}`
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/genres/{id}", delete(delete_genre_handler))
        .route("/movies/{id}", delete(delete_movie_handler))
        .route("/customers/{id}", delete(delete_customer_handler))
}
