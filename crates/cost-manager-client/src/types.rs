//! Request and response types for the cost-manager API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cost_manager_core::{Category, UserId};

pub use cost_manager_core::{CategoryBreakdown, CostRecord, CostSummary, MonthlyReport, User};

/// Request to register a user.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    /// Client-chosen id.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Request to record a cost item.
#[derive(Debug, Clone, Serialize)]
pub struct AddCostRequest {
    /// Free-text description.
    pub description: String,
    /// Spending category.
    pub category: Category,
    /// Owning user.
    pub userid: UserId,
    /// Amount spent.
    pub sum: f64,
    /// When the cost was incurred; the server uses the current time if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl AddCostRequest {
    /// A cost dated at the time the server receives it.
    #[must_use]
    pub fn new(
        userid: UserId,
        category: Category,
        description: impl Into<String>,
        sum: f64,
    ) -> Self {
        Self {
            description: description.into(),
            category,
            userid,
            sum,
            date: None,
        }
    }

    /// Set an explicit date.
    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

/// A developer listed by the about endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamMember {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Additional details.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
