//! API handlers.

pub mod about;
pub mod costs;
pub mod health;
pub mod reports;
pub mod users;

use crate::error::ApiError;

/// Fallback for routes that do not exist.
pub async fn not_found() -> ApiError {
    ApiError::UnknownEndpoint
}
