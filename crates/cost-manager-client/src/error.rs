//! Client error types.

/// Errors that can occur when using the cost-manager client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// The referenced user is not registered.
    #[error("user not found")]
    UserNotFound,

    /// A user with the requested id already exists.
    #[error("user already exists: {0}")]
    UserAlreadyExists(String),

    /// The category was rejected by the server.
    #[error("invalid category: {category}")]
    InvalidCategory {
        /// The rejected category.
        category: String,
    },

    /// The cost date lies outside the accepted window.
    #[error("date outside allowable range: {start} to {end}")]
    DateOutOfRange {
        /// First accepted instant, as reported by the server.
        start: String,
        /// Last accepted instant, as reported by the server.
        end: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
