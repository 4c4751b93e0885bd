//! Cost records and the validation of incoming cost items.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CostError, Result};
use crate::report::CostSummary;
use crate::{Category, CostId, UserId};

/// A single persisted expense. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    /// Server-assigned id.
    pub id: CostId,
    /// Free-text description.
    pub description: String,
    /// Spending category.
    pub category: Category,
    /// Owning user.
    #[serde(rename = "userid")]
    pub user_id: UserId,
    /// Amount spent.
    pub sum: f64,
    /// When the cost was incurred.
    pub date: DateTime<Utc>,
}

impl CostRecord {
    /// Assign an id to a validated cost, resolving a missing date to `now`.
    #[must_use]
    pub fn from_new(cost: NewCost, now: DateTime<Utc>) -> Self {
        Self {
            id: CostId::generate(),
            description: cost.description,
            category: cost.category,
            user_id: cost.user_id,
            sum: cost.sum,
            date: cost.date.unwrap_or(now),
        }
    }

    /// Day of month the cost was incurred on (1-based, UTC).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The report line for this cost.
    #[must_use]
    pub fn summary(&self) -> CostSummary {
        CostSummary {
            sum: self.sum,
            description: self.description.clone(),
            day: self.day(),
        }
    }
}

/// A validated cost item that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCost {
    /// Free-text description, never empty.
    pub description: String,
    /// Spending category.
    pub category: Category,
    /// Owning user.
    pub user_id: UserId,
    /// Positive, finite amount.
    pub sum: f64,
    /// Explicit date; `None` means "now".
    pub date: Option<DateTime<Utc>>,
}

/// Raw cost item as submitted by a client. Every field is optional so that
/// missing fields are reported as validation errors rather than decode failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostInput {
    /// Free-text description.
    pub description: Option<String>,
    /// Category name.
    pub category: Option<String>,
    /// Owning user.
    pub userid: Option<i64>,
    /// Amount spent.
    pub sum: Option<f64>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub date: Option<String>,
}

impl CostInput {
    /// Check mandatory fields, the category and the date format.
    ///
    /// # Errors
    ///
    /// - `CostError::Validation` if a mandatory field is absent, the sum is not a
    ///   positive number, or the date cannot be parsed.
    /// - `CostError::InvalidCategory` if the category is not recognized.
    pub fn validate(self) -> Result<NewCost> {
        let (Some(description), Some(category), Some(userid), Some(sum)) =
            (self.description, self.category, self.userid, self.sum)
        else {
            return Err(CostError::Validation(
                "description, category, userid and sum are required".into(),
            ));
        };

        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(CostError::Validation("description must not be empty".into()));
        }

        let category: Category = category.trim().parse()?;

        if !sum.is_finite() || sum <= 0.0 {
            return Err(CostError::Validation("sum must be a positive number".into()));
        }

        let date = self.date.as_deref().map(parse_date).transpose()?;

        Ok(NewCost {
            description,
            category,
            user_id: UserId::new(userid),
            sum,
            date,
        })
    }
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as midnight UTC.
///
/// # Errors
///
/// Returns `CostError::Validation` if neither format matches.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| CostError::Validation(format!("invalid date: {raw}")))
}
