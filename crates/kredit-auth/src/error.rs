//! Authentication error types.

use kredit_core::error::KreditError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("authorization header is missing or not a bearer token")]
    MissingToken,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("encryption error: {0}")]
    Encryption(String),

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error("invalid auth configuration: {0}")]
    InvalidConfig(String),
}

impl From<AuthError> for KreditError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => KreditError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::Encryption(msg) => KreditError::Encryption(msg),
            AuthError::Crypto(msg) => KreditError::Crypto(msg),
            AuthError::InvalidConfig(msg) => KreditError::Internal(msg),
        }
    }
}
