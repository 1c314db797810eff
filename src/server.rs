//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and Axum server lifecycle.

use crate::application::services::{
    AuthService, CustomerService, GenreService, MovieService, RentalService, ReturnService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgCustomerRepository, PgGenreRepository, PgMovieRepository, PgRentalRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Database migrations
/// - Repository and service wiring
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let genre_repository = Arc::new(PgGenreRepository::new(pool.clone()));
    let movie_repository = Arc::new(PgMovieRepository::new(pool.clone()));
    let customer_repository = Arc::new(PgCustomerRepository::new(pool.clone()));
    let rental_repository = Arc::new(PgRentalRepository::new(pool.clone()));

    let state = AppState {
        genre_service: Arc::new(GenreService::new(genre_repository.clone())),
        movie_service: Arc::new(MovieService::new(
            movie_repository.clone(),
            genre_repository,
        )),
        customer_service: Arc::new(CustomerService::new(customer_repository.clone())),
        rental_service: Arc::new(RentalService::new(
            rental_repository.clone(),
            movie_repository.clone(),
            customer_repository,
        )),
        return_service: Arc::new(ReturnService::new(rental_repository, movie_repository)),
        auth_service: Arc::new(AuthService::new(
            &config.jwt_private_key,
            config.jwt_expiry_hours,
        )),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
