//! JWT signing and verification for request authorization.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Claims embedded in every auth token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject -- the authenticated user's id.
    pub sub: i64,
    /// Grants access to destructive admin endpoints.
    pub is_admin: bool,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Service for signing and verifying HS256 auth tokens.
///
/// Verification is a pure capability check: no I/O, just the signature and
/// the standard expiry validation. Handlers receive the decoded
/// [`AuthClaims`] via request extensions.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: i64,
}

impl AuthService {
    /// Creates a new auth service from the signing secret.
    ///
    /// # Arguments
    ///
    /// - `private_key` - HMAC secret; must match the value used when tokens
    ///   were issued
    /// - `expiry_hours` - lifetime of newly signed tokens
    pub fn new(private_key: &str, expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(private_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(private_key.as_bytes()),
            expiry_hours,
        }
    }

    /// Signs a new token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn sign(&self, user_id: i64, is_admin: bool) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = AuthClaims {
            sub: user_id,
            is_admin,
            iat: now,
            exp: now + self.expiry_hours * 3600,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AppError::internal("Failed to sign token", json!({ "reason": e.to_string() }))
        })
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the signature is invalid, the
    /// token is malformed, or it has expired.
    pub fn verify(&self, token: &str) -> Result<AuthClaims, AppError> {
        decode::<AuthClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                AppError::unauthorized("Invalid token", json!({ "reason": e.to_string() }))
            })
    }
}
