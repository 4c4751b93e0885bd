//! Database schema definitions and column families.
//!
//! This module defines the column families used in `RocksDB` storage.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// User records, keyed by `user_id`.
    pub const USERS: &str = "users";

    /// Cost records, keyed by `cost_id` (ULID).
    pub const COSTS: &str = "costs";

    /// Index: costs by user and date, keyed by `user_id || date || cost_id`.
    /// Value is empty (index only).
    pub const COSTS_BY_USER_DATE: &str = "costs_by_user_date";

    /// Report cache documents, keyed by `user_id`.
    pub const REPORTS: &str = "reports";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::USERS, cf::COSTS, cf::COSTS_BY_USER_DATE, cf::REPORTS]
}
