//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, Direction, IteratorMode,
    MultiThreaded, Options, WriteBatch,
};

use cost_manager_core::{
    Category, CategoryBreakdown, CostId, CostRecord, CostSummary, MonthPeriod, ReportCacheEntry,
    User, UserId,
};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::Store;

/// RocksDB-backed storage implementation.
///
/// Read-modify-write operations (total increments, user registration, cache
/// upserts) hold `write_lock` for their whole duration, so they are atomic with
/// respect to each other within the process that owns the database.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    write_lock: Mutex<()>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self {
            db: Arc::new(db),
            write_lock: Mutex::new(()),
        })
    }

    /// Flush memtables of every column family to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if a flush fails.
    pub fn flush(&self) -> Result<()> {
        for name in all_column_families() {
            let cf = self.cf(name)?;
            self.db
                .flush_cf(&cf)
                .map_err(|e| StoreError::Database(e.to_string()))?;
        }
        Ok(())
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| StoreError::Database("write lock poisoned".into()))
    }

    fn get_doc<T: serde::de::DeserializeOwned>(
        &self,
        cf_name: &str,
        key: &[u8],
    ) -> Result<Option<T>> {
        let cf = self.cf(cf_name)?;
        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn put_doc<T: serde::Serialize>(&self, cf_name: &str, key: &[u8], value: &T) -> Result<()> {
        let cf = self.cf(cf_name)?;
        let value = Self::serialize(value)?;
        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl Store for RocksStore {
    // =========================================================================
    // User Registry
    // =========================================================================

    fn create_user(&self, user: &User) -> Result<()> {
        let _guard = self.lock()?;
        let key = keys::user_key(user.id);

        if self.get_doc::<User>(cf::USERS, &key)?.is_some() {
            return Err(StoreError::UserAlreadyExists(user.id));
        }

        self.put_doc(cf::USERS, &key, user)
    }

    fn get_user(&self, user_id: UserId) -> Result<Option<User>> {
        self.get_doc(cf::USERS, &keys::user_key(user_id))
    }

    fn increment_user_total(&self, user_id: UserId, delta: f64) -> Result<f64> {
        let _guard = self.lock()?;
        let key = keys::user_key(user_id);

        let user = match self.get_doc::<User>(cf::USERS, &key)? {
            Some(mut user) => {
                user.total += delta;
                user
            }
            None => {
                tracing::debug!(%user_id, "creating user record on first increment");
                User::with_total(user_id, delta)
            }
        };

        self.put_doc(cf::USERS, &key, &user)?;
        Ok(user.total)
    }

    // =========================================================================
    // Cost Records
    // =========================================================================

    fn put_cost(&self, cost: &CostRecord) -> Result<()> {
        let cf_costs = self.cf(cf::COSTS)?;
        let cf_index = self.cf(cf::COSTS_BY_USER_DATE)?;

        let cost_key = keys::cost_key(&cost.id);
        let index_key = keys::user_cost_key(cost.user_id, cost.date, &cost.id);
        let value = Self::serialize(cost)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_costs, &cost_key, &value);
        batch.put_cf(&cf_index, &index_key, []); // Index entry (empty value)

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn get_cost(&self, cost_id: &CostId) -> Result<Option<CostRecord>> {
        self.get_doc(cf::COSTS, &keys::cost_key(cost_id))
    }

    fn costs_in_range(
        &self,
        user_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CostRecord>> {
        let cf_index = self.cf(cf::COSTS_BY_USER_DATE)?;
        let from = keys::user_date_bound(user_id, start);
        let until = keys::user_date_bound(user_id, end);

        let iter = self
            .db
            .iterator_cf(&cf_index, IteratorMode::From(&from, Direction::Forward));

        let mut costs = Vec::new();
        for item in iter {
            let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;

            let past_end = key
                .get(..keys::USER_DATE_PREFIX_LEN)
                .map_or(true, |prefix| prefix >= until.as_slice());
            if past_end {
                break;
            }

            let cost_id = keys::extract_cost_id_from_index_key(&key).ok_or_else(|| {
                StoreError::Database(format!("malformed cost index key ({} bytes)", key.len()))
            })?;

            match self.get_cost(&cost_id)? {
                // Index keys are millisecond-truncated; compare the exact date too.
                Some(cost) if start <= cost.date && cost.date < end => costs.push(cost),
                Some(_) => {}
                None => tracing::warn!(%cost_id, "cost index entry without record"),
            }
        }

        Ok(costs)
    }

    // =========================================================================
    // Report Cache
    // =========================================================================

    fn get_report_entry(&self, user_id: UserId) -> Result<Option<ReportCacheEntry>> {
        self.get_doc(cf::REPORTS, &keys::report_key(user_id))
    }

    fn freeze_month(
        &self,
        user_id: UserId,
        period: &MonthPeriod,
        costs: &CategoryBreakdown,
    ) -> Result<()> {
        let _guard = self.lock()?;
        let key = keys::report_key(user_id);

        let mut entry = self
            .get_doc::<ReportCacheEntry>(cf::REPORTS, &key)?
            .unwrap_or_else(|| ReportCacheEntry::new(user_id));
        entry.freeze_month(period, costs.clone());

        self.put_doc(cf::REPORTS, &key, &entry)
    }

    fn append_to_cached_month(
        &self,
        user_id: UserId,
        period: &MonthPeriod,
        category: Category,
        summary: CostSummary,
    ) -> Result<bool> {
        let _guard = self.lock()?;
        let key = keys::report_key(user_id);

        let Some(mut entry) = self.get_doc::<ReportCacheEntry>(cf::REPORTS, &key)? else {
            return Ok(false);
        };
        if !entry.append(period, category, summary) {
            return Ok(false);
        }

        self.put_doc(cf::REPORTS, &key, &entry)?;
        Ok(true)
    }
}
