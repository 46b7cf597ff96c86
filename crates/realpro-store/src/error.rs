//! Storage-backend error types and conversions.

use realpro_core::error::RealProError;

/// Backend-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encode failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for RealProError {
    fn from(err: StoreError) -> Self {
        RealProError::Storage(err.to_string())
    }
}
