//! Core types and policies for the cost manager.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - **Identifiers**: `UserId`, `CostId`
//! - **Records**: `User`, `CostRecord`, `Category`
//! - **Reports**: `CategoryBreakdown`, `ReportCacheEntry`, `MonthlyReport`
//! - **Time policy**: `MonthPeriod`, `IngestionWindow`
//!
//! # Month policy
//!
//! A month's report is computed from cost records until seven days after its
//! last day; after that it is frozen into the report cache. New costs may be
//! backdated into the previous month only during the first six days of a
//! month, so a frozen month never receives new costs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod cost;
pub mod error;
pub mod ids;
pub mod period;
pub mod report;
pub mod user;

pub use category::Category;
pub use cost::{parse_date, CostInput, CostRecord, NewCost};
pub use error::{CostError, ErrorKind, Result};
pub use ids::{CostId, IdError, UserId};
pub use period::{IngestionWindow, MonthPeriod, GRACE_PERIOD_DAYS};
pub use report::{
    CategoryBreakdown, CostSummary, MonthReport, MonthlyReport, ReportCacheEntry, YearReports,
};
pub use user::User;
