//! Cost ingestion.

use chrono::{DateTime, Utc};

use cost_manager_core::{CostError, CostRecord, IngestionWindow, MonthPeriod, NewCost, Result};
use cost_manager_store::Store;

/// Record a validated cost for an existing user.
///
/// The steps run in order without rollback:
///
/// 1. persist the cost record,
/// 2. add its sum to the user's total,
/// 3. append it to the cached report of its month, if one exists and the month
///    is neither past its freeze deadline nor already frozen in the cache.
///
/// # Errors
///
/// - `CostError::DateOutOfRange` if the date is outside the ingestion window.
/// - `CostError::UserNotFound` if the user is not registered.
/// - `CostError::Storage` if a store operation fails.
pub fn add_cost<S: Store + ?Sized>(
    store: &S,
    cost: NewCost,
    now: DateTime<Utc>,
) -> Result<CostRecord> {
    let date = cost.date.unwrap_or(now);
    IngestionWindow::at(now)?.check(date)?;

    if !store.user_exists(cost.user_id)? {
        return Err(CostError::UserNotFound(cost.user_id));
    }

    let record = CostRecord::from_new(cost, now);
    store.put_cost(&record)?;

    let total = store.increment_user_total(record.user_id, record.sum)?;

    tracing::info!(
        user_id = %record.user_id,
        cost_id = %record.id,
        category = %record.category,
        sum = record.sum,
        total,
        "Cost recorded"
    );

    let period = MonthPeriod::containing(record.date)?;
    if period.is_frozen_at(now) {
        tracing::debug!(
            user_id = %record.user_id,
            year = period.year(),
            month = period.month(),
            "Month is frozen, cached report left untouched"
        );
    } else if store.append_to_cached_month(
        record.user_id,
        &period,
        record.category,
        record.summary(),
    )? {
        tracing::debug!(
            user_id = %record.user_id,
            year = period.year(),
            month = period.month(),
            "Cost appended to cached report"
        );
    }

    Ok(record)
}
