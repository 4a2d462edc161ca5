//! Session token issuance and validation (HMAC-signed JWT).
//!
//! Expiry is checked against a caller-supplied clock rather than the
//! system time inside `jsonwebtoken`, so validation is deterministic.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// HMAC family accepted on validation. Tokens are issued with HS256.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Claims embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Customer NIK.
    pub nik: String,
    /// Customer display name.
    pub full_name: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Issue a signed HS256 session token valid for
/// `config.token_lifetime_secs` from `now`.
pub fn issue_token(
    nik: &str,
    full_name: &str,
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    let iat = now.timestamp();
    let exp = i64::try_from(config.token_lifetime_secs)
        .ok()
        .and_then(|lifetime| iat.checked_add(lifetime))
        .ok_or_else(|| {
            AuthError::InvalidConfig(format!(
                "token lifetime of {}s is out of range",
                config.token_lifetime_secs
            ))
        })?;
    let claims = SessionClaims {
        nik: nik.to_string(),
        full_name: full_name.to_string(),
        iat,
        exp,
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Verify signature and algorithm family, then check expiry against
/// `now`.
pub fn validate_token(
    token: &str,
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> Result<SessionClaims, AuthError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = HMAC_ALGORITHMS.to_vec();
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp"]);

    let claims = jsonwebtoken::decode::<SessionClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| AuthError::TokenInvalid(e.to_string()))?;

    if now.timestamp() >= claims.exp {
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}

/// Extract the token from an `Authorization: Bearer <token>` header
/// value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let token = header
        .map(str::trim)
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .ok_or(AuthError::MissingToken)?;

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
