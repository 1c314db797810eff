//! Admin capability check for destructive endpoints.

use axum::{extract::Request, middleware::Next, response::Response};
use serde_json::json;

use crate::application::services::AuthClaims;
use crate::error::AppError;

/// Requires admin claims on the request.
///
/// Must run after [`super::auth::layer`], which stores the decoded
/// [`AuthClaims`] in request extensions.
///
/// # Errors
///
/// Returns `401` if no claims are present (auth layer missing), `403` if
/// the caller is not an admin.
pub async fn layer(req: Request, next: Next) -> Result<Response, AppError> {
    let claims = req.extensions().get::<AuthClaims>().ok_or_else(|| {
        AppError::unauthorized("Access denied. No token provided.", json!({}))
    })?;

    if !claims.is_admin {
        return Err(AppError::forbidden("Access denied.", json!({})));
    }

    Ok(next.run(req).await)
}
