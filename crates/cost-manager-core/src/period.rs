//! Calendar months and the time windows derived from them.
//!
//! All boundaries are computed in UTC. A month covers `[start, end)` where `end`
//! is the first instant of the following month.
//!
//! Two policies share the same grace period:
//!
//! - **Freeze**: a month's report may be cached once `now` is past
//!   `last_day + GRACE_PERIOD_DAYS`.
//! - **Ingestion**: new costs are accepted from the first day of the current
//!   month, or of the previous month while today's day-of-month is below
//!   `GRACE_PERIOD_DAYS`.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

use crate::error::{CostError, Result};

/// Days after a month ends during which it stays open.
pub const GRACE_PERIOD_DAYS: u32 = 7;

/// Earliest accepted report year.
pub const MIN_YEAR: i32 = 1;

/// Latest accepted report year.
pub const MAX_YEAR: i32 = 9999;

/// A validated calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl MonthPeriod {
    /// Build a month from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns `CostError::Validation` if the month is outside `1..=12` or the
    /// year outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(CostError::Validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CostError::Validation(format!(
                "year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
            )));
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| CostError::Validation(format!("invalid month {year}-{month}")))?;
        let next = first
            .checked_add_months(Months::new(1))
            .ok_or_else(|| CostError::Validation(format!("invalid month {year}-{month}")))?;

        Ok(Self {
            year,
            month,
            start: midnight(first),
            end: midnight(next),
        })
    }

    /// The month containing `instant`.
    ///
    /// # Errors
    ///
    /// Returns `CostError::Validation` if the instant lies outside the supported years.
    pub fn containing(instant: DateTime<Utc>) -> Result<Self> {
        Self::new(instant.year(), instant.month())
    }

    /// The month before this one.
    ///
    /// # Errors
    ///
    /// Returns `CostError::Validation` when stepping before `MIN_YEAR`.
    pub fn previous(&self) -> Result<Self> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// First instant of the month (inclusive).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// First instant of the following month (exclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Midnight at the start of the last day of the month.
    #[must_use]
    pub fn last_day(&self) -> DateTime<Utc> {
        self.end - Duration::days(1)
    }

    /// Instant after which the month's report is frozen.
    #[must_use]
    pub fn freeze_deadline(&self) -> DateTime<Utc> {
        self.last_day() + Duration::days(i64::from(GRACE_PERIOD_DAYS))
    }

    /// Whether the month's report may be cached at `now`.
    #[must_use]
    pub fn is_frozen_at(&self, now: DateTime<Utc>) -> bool {
        now > self.freeze_deadline()
    }
}

/// The closed range of dates for which new costs are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionWindow {
    /// First accepted instant.
    pub start: DateTime<Utc>,
    /// Last accepted instant (the moment the window was computed).
    pub end: DateTime<Utc>,
}

impl IngestionWindow {
    /// The window as seen at `now`.
    ///
    /// # Errors
    ///
    /// Returns `CostError::Validation` if `now` is outside the supported years.
    pub fn at(now: DateTime<Utc>) -> Result<Self> {
        let current = MonthPeriod::containing(now)?;
        let first = if now.day() < GRACE_PERIOD_DAYS {
            current.previous()?
        } else {
            current
        };
        Ok(Self {
            start: first.start(),
            end: now,
        })
    }

    /// Whether `date` may be recorded.
    #[must_use]
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }

    /// Reject `date` unless it lies within the window.
    ///
    /// # Errors
    ///
    /// Returns `CostError::DateOutOfRange` when the date is outside the window.
    pub fn check(&self, date: DateTime<Utc>) -> Result<()> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(CostError::DateOutOfRange {
                date,
                start: self.start,
                end: self.end,
            })
        }
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::default()).and_utc()
}
