//! Key encoding utilities for `RocksDB`.
//!
//! Signed integers are stored big-endian with the sign bit flipped so that the
//! byte order of keys matches numeric order.

use chrono::{DateTime, Utc};

use cost_manager_core::{CostId, UserId};

/// Length of a `user_id || date` prefix.
pub const USER_DATE_PREFIX_LEN: usize = 16;

/// Length of a full `user_id || date || cost_id` index key.
pub const USER_COST_KEY_LEN: usize = 32;

/// Create a user key from a user ID.
#[must_use]
pub fn user_key(user_id: UserId) -> Vec<u8> {
    user_id.to_key_bytes().to_vec()
}

/// Create a report cache key from a user ID.
#[must_use]
pub fn report_key(user_id: UserId) -> Vec<u8> {
    user_id.to_key_bytes().to_vec()
}

/// Create a cost key from a cost ID.
#[must_use]
pub fn cost_key(cost_id: &CostId) -> Vec<u8> {
    cost_id.to_bytes().to_vec()
}

/// Encode an instant as order-preserving milliseconds since the epoch.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn timestamp_bytes(instant: DateTime<Utc>) -> [u8; 8] {
    ((instant.timestamp_millis() as u64) ^ (1 << 63)).to_be_bytes()
}

/// Create a `user_id || date` bound for range scans.
///
/// Format: `user_id (8 bytes) || millis (8 bytes)`
#[must_use]
pub fn user_date_bound(user_id: UserId, instant: DateTime<Utc>) -> Vec<u8> {
    let mut key = Vec::with_capacity(USER_DATE_PREFIX_LEN);
    key.extend_from_slice(&user_id.to_key_bytes());
    key.extend_from_slice(&timestamp_bytes(instant));
    key
}

/// Create a user-cost index key.
///
/// Format: `user_id (8 bytes) || millis (8 bytes) || cost_id (16 bytes)`
///
/// Costs for a user sort by date, then by creation order.
#[must_use]
pub fn user_cost_key(user_id: UserId, date: DateTime<Utc>, cost_id: &CostId) -> Vec<u8> {
    let mut key = user_date_bound(user_id, date);
    key.extend_from_slice(&cost_id.to_bytes());
    key
}

/// Extract the cost ID from a user-cost index key.
///
/// Returns `None` if the key is not a full index key.
#[must_use]
pub fn extract_cost_id_from_index_key(key: &[u8]) -> Option<CostId> {
    let bytes: [u8; 16] = key
        .get(USER_DATE_PREFIX_LEN..USER_COST_KEY_LEN)?
        .try_into()
        .ok()?;
    Some(CostId::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn user_cost_key_format() {
        let user_id = UserId::new(123);
        let cost_id = CostId::generate();
        let date = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let key = user_cost_key(user_id, date, &cost_id);

        assert_eq!(key.len(), USER_COST_KEY_LEN);
        assert_eq!(&key[..8], user_id.to_key_bytes());
        assert_eq!(&key[..USER_DATE_PREFIX_LEN], user_date_bound(user_id, date));
        assert_eq!(&key[USER_DATE_PREFIX_LEN..], cost_id.to_bytes());
    }

    #[test]
    fn extract_cost_id_roundtrip() {
        let cost_id = CostId::generate();
        let key = user_cost_key(UserId::new(1), Utc::now(), &cost_id);
        assert_eq!(extract_cost_id_from_index_key(&key), Some(cost_id));
        assert_eq!(extract_cost_id_from_index_key(&key[..20]), None);
    }

    #[test]
    fn timestamps_sort_chronologically() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        let instants = [
            epoch - Duration::days(400),
            epoch - Duration::milliseconds(1),
            epoch,
            Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
        ];
        let encoded: Vec<_> = instants.iter().map(|i| timestamp_bytes(*i)).collect();
        let mut sorted = encoded.clone();
        sorted.sort_unstable();
        assert_eq!(encoded, sorted);
    }
}
