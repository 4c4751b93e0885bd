//! Monthly report materialization.

use chrono::{DateTime, Utc};

use cost_manager_core::{CategoryBreakdown, CostError, MonthPeriod, MonthlyReport, Result, UserId};
use cost_manager_store::Store;

/// Return a user's costs for one month, grouped by category.
///
/// A cached month is returned as stored. Otherwise the breakdown is computed
/// from the cost records dated within the month, and written to the cache when
/// `now` is past the month's freeze deadline.
///
/// # Errors
///
/// - `CostError::UserNotFound` if the user is not registered.
/// - `CostError::Storage` if a store operation fails.
pub fn monthly_report<S: Store + ?Sized>(
    store: &S,
    user_id: UserId,
    period: &MonthPeriod,
    now: DateTime<Utc>,
) -> Result<MonthlyReport> {
    if !store.user_exists(user_id)? {
        return Err(CostError::UserNotFound(user_id));
    }

    if let Some(cached) = store.get_cached_month(user_id, period)? {
        tracing::debug!(
            %user_id,
            year = period.year(),
            month = period.month(),
            "Report served from cache"
        );
        return Ok(MonthlyReport::new(user_id, period, cached.costs));
    }

    let costs = store.costs_in_range(user_id, period.start(), period.end())?;
    let breakdown = CategoryBreakdown::from_costs(&costs);

    if period.is_frozen_at(now) {
        store.freeze_month(user_id, period, &breakdown)?;
        tracing::info!(
            %user_id,
            year = period.year(),
            month = period.month(),
            items = breakdown.item_count(),
            "Monthly report frozen"
        );
    } else {
        tracing::debug!(
            %user_id,
            year = period.year(),
            month = period.month(),
            deadline = %period.freeze_deadline(),
            "Month still open, report not cached"
        );
    }

    Ok(MonthlyReport::new(user_id, period, breakdown))
}
