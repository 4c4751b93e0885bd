//! Cost ledger operations.
//!
//! These functions hold the business rules of the service and work against any
//! [`Store`](cost_manager_store::Store). The current time is passed in explicitly
//! so that the month-freeze and ingestion-window policies can be exercised with
//! fixed clocks.

pub mod ingest;
pub mod reports;

pub use ingest::add_cost;
pub use reports::monthly_report;
