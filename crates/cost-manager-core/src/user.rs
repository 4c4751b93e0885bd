//! User records.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A registered user and their running spend total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Client-chosen unique id.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Sum of every cost ever recorded for this user.
    pub total: f64,
}

impl User {
    /// Create a user with a zero total.
    #[must_use]
    pub fn new(id: UserId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            total: 0.0,
        }
    }

    /// Placeholder record created when a total is incremented for an unknown id.
    #[must_use]
    pub fn with_total(id: UserId, total: f64) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            total,
        }
    }
}
