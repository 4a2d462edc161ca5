//! Error types for the Kredit system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KreditError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Transaction exceeds limit: {reason}")]
    LimitExceeded { reason: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl KreditError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Failures caused by the server or its collaborators rather than
    /// by the caller's input. Their detail must not reach the caller.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Encryption(_) | Self::Crypto(_) | Self::Internal(_)
        )
    }
}

pub type KreditResult<T> = Result<T, KreditError>;
