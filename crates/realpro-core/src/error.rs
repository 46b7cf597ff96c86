//! Error types for the RealPro system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RealProError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RealProError {
    /// Build a field-level validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RealProError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type RealProResult<T> = Result<T, RealProError>;
