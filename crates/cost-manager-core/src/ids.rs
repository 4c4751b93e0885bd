//! Identifier types for the cost manager.
//!
//! Users are addressed by the integer id clients choose at registration.
//! Cost records get a server-assigned ULID so that ids sort by creation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// A user identifier.
///
/// Serialized as a plain JSON integer (`"userid": 123`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw integer id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Big-endian bytes with the sign bit flipped, so byte order matches numeric order.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn to_key_bytes(self) -> [u8; 8] {
        ((self.0 as u64) ^ (1 << 63)).to_be_bytes()
    }
}

impl FromStr for UserId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| IdError::InvalidUserId(s.to_string()))
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cost record identifier using ULID for time-ordering.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CostId(Ulid);

impl CostId {
    /// Generate a new `CostId` with the current timestamp.
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Return the bytes of the ULID (16 bytes).
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.to_bytes()
    }

    /// Create a `CostId` from bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Ulid::from_bytes(bytes))
    }
}

impl FromStr for CostId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(Self)
            .map_err(|_| IdError::InvalidCostId(s.to_string()))
    }
}

impl fmt::Debug for CostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CostId({})", self.0)
    }
}

impl fmt::Display for CostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CostId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CostId> for String {
    fn from(id: CostId) -> Self {
        id.0.to_string()
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not an integer user id.
    #[error("invalid user id: {0}")]
    InvalidUserId(String),

    /// The input is not a valid ULID.
    #[error("invalid cost id: {0}")]
    InvalidCostId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_integers() {
        assert_eq!("123".parse::<UserId>().unwrap(), UserId::new(123));
        assert_eq!(" 42 ".parse::<UserId>().unwrap(), UserId::new(42));
        assert!(matches!(
            "abc".parse::<UserId>(),
            Err(IdError::InvalidUserId(_))
        ));
        assert!("12.5".parse::<UserId>().is_err());
    }

    #[test]
    fn user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(123_123)).unwrap();
        assert_eq!(json, "123123");
    }

    #[test]
    fn user_key_bytes_preserve_order() {
        let ids = [i64::MIN, -5, -1, 0, 1, 123, i64::MAX];
        let keys: Vec<_> = ids.iter().map(|&id| UserId::new(id).to_key_bytes()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn cost_id_roundtrip() {
        let id = CostId::generate();
        let parsed: CostId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert_eq!(CostId::from_bytes(id.to_bytes()), id);
    }

    #[test]
    fn cost_id_rejects_garbage() {
        assert!(matches!(
            "not-a-ulid".parse::<CostId>(),
            Err(IdError::InvalidCostId(_))
        ));
    }
}
