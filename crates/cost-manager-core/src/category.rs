//! Spending categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CostError;

/// One of the five fixed spending categories.
///
/// Declaration order is the order categories appear in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries, restaurants.
    Food,
    /// Courses, books, equipment for study.
    Education,
    /// Medical and pharmacy spend.
    Health,
    /// Gym, clubs, gear.
    Sport,
    /// Rent, utilities, repairs.
    Housing,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::Education,
        Self::Health,
        Self::Sport,
        Self::Housing,
    ];

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Education => "education",
            Self::Health => "health",
            Self::Sport => "sport",
            Self::Housing => "housing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CostError::InvalidCategory(s.to_string()))
    }
}
