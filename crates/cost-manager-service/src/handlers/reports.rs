//! Monthly report handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;

use cost_manager_core::{MonthPeriod, MonthlyReport, UserId};

use crate::error::ApiError;
use crate::ledger;
use crate::state::AppState;

/// Validated report query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportQuery {
    /// User to report on.
    pub user_id: UserId,
    /// Calendar year.
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl ReportQuery {
    /// Parse `id` (or `userid`), `year` and `month` from query parameters.
    ///
    /// The month range is checked later, when the period is built.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ApiError> {
        let (Some(id), Some(year), Some(month)) = (
            params.get("id").or_else(|| params.get("userid")),
            params.get("year"),
            params.get("month"),
        ) else {
            return Err(ApiError::BadRequest(
                "id (or userid), year and month are required".into(),
            ));
        };

        Ok(Self {
            user_id: UserId::new(parse_int(id, "id")?),
            year: parse_int(year, "year")?,
            month: parse_int(month, "month")?,
        })
    }
}

fn parse_int<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("{name} must be an integer, got {raw:?}")))
}

/// Get a user's costs for one month, grouped by category.
pub async fn monthly_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MonthlyReport>, ApiError> {
    let query = ReportQuery::from_params(&params)?;
    let period = MonthPeriod::new(query.year, query.month)?;

    let report = ledger::monthly_report(state.store.as_ref(), query.user_id, &period, Utc::now())?;

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn accepts_id_or_userid() {
        let expected = ReportQuery {
            user_id: UserId::new(123),
            year: 2025,
            month: 3,
        };
        let by_id = params(&[("id", "123"), ("year", "2025"), ("month", "3")]);
        let by_userid = params(&[("userid", "123"), ("year", "2025"), ("month", "03")]);
        assert_eq!(ReportQuery::from_params(&by_id).unwrap(), expected);
        assert_eq!(ReportQuery::from_params(&by_userid).unwrap(), expected);
    }

    #[test]
    fn rejects_missing_and_non_numeric() {
        let missing = params(&[("id", "1"), ("year", "2025")]);
        assert!(matches!(
            ReportQuery::from_params(&missing),
            Err(ApiError::BadRequest(_))
        ));

        let text = params(&[("id", "abc"), ("year", "2025"), ("month", "1")]);
        assert!(matches!(
            ReportQuery::from_params(&text),
            Err(ApiError::BadRequest(msg)) if msg.starts_with("id must be an integer")
        ));
    }
}
