//! `x-auth-token` authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Name of the header carrying the auth token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticates requests using the `x-auth-token` header.
///
/// # Authentication Flow
///
/// 1. Extract the token from the `x-auth-token` header
/// 2. Verify the signature and expiry via [`crate::application::services::AuthService`]
/// 3. Store the decoded claims in request extensions for downstream checks
/// 4. Continue to the next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, empty, or the token
/// does not verify.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if token.is_empty() {
        return Err(AppError::unauthorized(
            "Access denied. No token provided.",
            json!({ "header": AUTH_TOKEN_HEADER }),
        ));
    }

    let claims = st.auth_service.verify(token)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
