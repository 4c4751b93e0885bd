//! Error types for cost manager storage.

use cost_manager_core::{CostError, UserId};

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A user with this id already exists.
    #[error("user already exists: {0}")]
    UserAlreadyExists(UserId),
}

impl From<StoreError> for CostError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UserAlreadyExists(id) => Self::UserAlreadyExists(id),
            StoreError::Database(msg) | StoreError::Serialization(msg) => Self::Storage(msg),
        }
    }
}
