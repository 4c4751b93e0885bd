//! Error types for the cost manager.

use chrono::{DateTime, Utc};

use crate::ids::{IdError, UserId};

/// Result type for cost manager operations.
pub type Result<T> = std::result::Result<T, CostError>;

/// Broad classification of a [`CostError`], carrying the HTTP status it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed, missing or out-of-range input.
    Validation,
    /// A referenced user does not exist.
    NotFound,
    /// The resource already exists.
    Conflict,
    /// The underlying store failed.
    Storage,
}

impl ErrorKind {
    /// HTTP status code hint for this kind.
    #[must_use]
    pub const fn status_hint(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Storage => 500,
        }
    }
}

/// Errors that can occur in cost manager operations.
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The category is not one of the five recognized categories.
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    /// The cost date falls outside the window in which new costs are accepted.
    #[error("date outside allowable range: {date} is not within [{start}, {end}]")]
    DateOutOfRange {
        /// The rejected date.
        date: DateTime<Utc>,
        /// First accepted instant.
        start: DateTime<Utc>,
        /// Last accepted instant.
        end: DateTime<Utc>,
    },

    /// The referenced user does not exist.
    #[error("User does not exist")]
    UserNotFound(UserId),

    /// A user with this id is already registered.
    #[error("user already exists: {0}")]
    UserAlreadyExists(UserId),

    /// Invalid identifier.
    #[error(transparent)]
    InvalidId(#[from] IdError),

    /// Storage error, surfaced as-is.
    #[error("storage error: {0}")]
    Storage(String),
}

impl CostError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_)
            | Self::InvalidCategory(_)
            | Self::DateOutOfRange { .. }
            | Self::InvalidId(_) => ErrorKind::Validation,
            Self::UserNotFound(_) => ErrorKind::NotFound,
            Self::UserAlreadyExists(_) => ErrorKind::Conflict,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_hints() {
        assert_eq!(CostError::Validation("x".into()).kind().status_hint(), 400);
        assert_eq!(CostError::InvalidCategory("travel".into()).kind().status_hint(), 400);
        assert_eq!(CostError::UserNotFound(UserId::new(1)).kind().status_hint(), 404);
        assert_eq!(CostError::UserAlreadyExists(UserId::new(1)).kind().status_hint(), 409);
        assert_eq!(CostError::Storage("io".into()).kind().status_hint(), 500);
        assert_eq!(
            CostError::from(IdError::InvalidUserId("x".into())).kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn user_not_found_message() {
        assert_eq!(
            CostError::UserNotFound(UserId::new(999)).to_string(),
            "User does not exist"
        );
    }
}
