//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check: database connectivity (public)
//! - `/api/*`       - REST API; reads are public, mutations require
//!   `x-auth-token`, deletes additionally require admin claims
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - JWT via `x-auth-token` header
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{admin, auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// The router without the path normalization wrapper.
///
/// Split out so integration tests can mount it directly.
pub fn router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    // Layers run outermost-first: auth decodes the claims the admin check
    // reads from request extensions.
    let admin = api::routes::admin_routes()
        .route_layer(middleware::from_fn(admin::layer))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = api::routes::public_routes().merge(protected).merge(admin);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
