//! `RocksDB` storage layer for the cost manager.
//!
//! This crate provides persistent storage for users, cost records, and the
//! monthly report cache using `RocksDB` with column families.
//!
//! # Architecture
//!
//! The storage uses the following column families:
//!
//! - `users`: User records, keyed by `user_id`
//! - `costs`: Cost records, keyed by `cost_id` (ULID)
//! - `costs_by_user_date`: Index for range queries by user and date
//! - `reports`: One report cache document per user, keyed by `user_id`
//!
//! Values are CBOR-encoded documents.
//!
//! # Example
//!
//! ```no_run
//! use cost_manager_store::{RocksStore, Store};
//! use cost_manager_core::{User, UserId};
//!
//! let store = RocksStore::open("/tmp/cost-manager-db").unwrap();
//!
//! let user = User::new(UserId::new(123), "Ada", "Lovelace");
//! store.create_user(&user).unwrap();
//!
//! let total = store.increment_user_total(UserId::new(123), 50.0).unwrap();
//! assert_eq!(total, 50.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;

use chrono::{DateTime, Utc};
use cost_manager_core::{
    Category, CategoryBreakdown, CostId, CostRecord, CostSummary, MonthPeriod, MonthReport,
    ReportCacheEntry, User, UserId,
};

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer, allowing for different implementations
/// (e.g., `RocksDB`, in-memory for testing). Every read-modify-write operation is
/// atomic with respect to the others on the same store.
pub trait Store: Send + Sync {
    // =========================================================================
    // User Registry
    // =========================================================================

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserAlreadyExists` if the id is taken.
    fn create_user(&self, user: &User) -> Result<()>;

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_user(&self, user_id: UserId) -> Result<Option<User>>;

    /// Check whether a user is registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn user_exists(&self, user_id: UserId) -> Result<bool> {
        Ok(self.get_user(user_id)?.is_some())
    }

    /// Add `delta` to the user's total, creating the user with `total = delta`
    /// if absent.
    ///
    /// Returns the new total.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn increment_user_total(&self, user_id: UserId, delta: f64) -> Result<f64>;

    // =========================================================================
    // Cost Records
    // =========================================================================

    /// Insert a cost record.
    ///
    /// This also maintains the user/date index.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_cost(&self, cost: &CostRecord) -> Result<()>;

    /// Get a cost record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_cost(&self, cost_id: &CostId) -> Result<Option<CostRecord>>;

    /// List a user's costs with `start <= date < end`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn costs_in_range(
        &self,
        user_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CostRecord>>;

    // =========================================================================
    // Report Cache
    // =========================================================================

    /// Get the user's whole report cache document.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_report_entry(&self, user_id: UserId) -> Result<Option<ReportCacheEntry>>;

    /// Get one cached month.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_cached_month(
        &self,
        user_id: UserId,
        period: &MonthPeriod,
    ) -> Result<Option<MonthReport>> {
        Ok(self
            .get_report_entry(user_id)?
            .and_then(|entry| entry.month(period).cloned()))
    }

    /// Write `costs` into the cache at `years[year].months[month]` and mark the
    /// month frozen, creating the document and any missing level. Rewriting
    /// identical content is a no-op in effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn freeze_month(
        &self,
        user_id: UserId,
        period: &MonthPeriod,
        costs: &CategoryBreakdown,
    ) -> Result<()>;

    /// Push `summary` onto `category` of an already cached month.
    ///
    /// Returns `false` without writing when the month is not cached or is
    /// frozen. The check and the write happen under one write lock, so a month
    /// frozen concurrently is never extended.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn append_to_cached_month(
        &self,
        user_id: UserId,
        period: &MonthPeriod,
        category: Category,
        summary: CostSummary,
    ) -> Result<bool>;
}
