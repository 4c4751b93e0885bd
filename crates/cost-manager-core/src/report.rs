//! Monthly report types.
//!
//! A report groups one user's costs for one month by category. Reports are
//! derived from cost records; the [`ReportCacheEntry`] holds the frozen ones,
//! nested as `years -> months -> costs`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Category, CostRecord, MonthPeriod, UserId};

/// One line of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Amount spent.
    pub sum: f64,
    /// Free-text description.
    pub description: String,
    /// Day of month the cost was incurred on.
    pub day: u32,
}

/// Costs grouped by category. Always holds all five categories, in report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Category, Vec<CostSummary>>",
    into = "BTreeMap<Category, Vec<CostSummary>>"
)]
pub struct CategoryBreakdown(BTreeMap<Category, Vec<CostSummary>>);

impl CategoryBreakdown {
    /// A breakdown with every category empty.
    #[must_use]
    pub fn empty() -> Self {
        Self(Category::ALL.into_iter().map(|c| (c, Vec::new())).collect())
    }

    /// Group records by category, keeping the iteration order within each category.
    pub fn from_costs<'a>(costs: impl IntoIterator<Item = &'a CostRecord>) -> Self {
        let mut breakdown = Self::empty();
        for cost in costs {
            breakdown.push(cost.category, cost.summary());
        }
        breakdown
    }

    /// Append a line to a category.
    pub fn push(&mut self, category: Category, summary: CostSummary) {
        self.0.entry(category).or_default().push(summary);
    }

    /// Lines recorded under `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> &[CostSummary] {
        self.0.get(&category).map_or(&[][..], Vec::as_slice)
    }

    /// Iterate categories in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CostSummary])> {
        self.0.iter().map(|(c, items)| (*c, items.as_slice()))
    }

    /// Number of lines across all categories.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl Default for CategoryBreakdown {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<BTreeMap<Category, Vec<CostSummary>>> for CategoryBreakdown {
    fn from(map: BTreeMap<Category, Vec<CostSummary>>) -> Self {
        let mut breakdown = Self(map);
        for category in Category::ALL {
            breakdown.0.entry(category).or_default();
        }
        breakdown
    }
}

impl From<CategoryBreakdown> for BTreeMap<Category, Vec<CostSummary>> {
    fn from(breakdown: CategoryBreakdown) -> Self {
        breakdown.0
    }
}

/// A month inside the cache document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthReport {
    /// The breakdown.
    pub costs: CategoryBreakdown,
    /// Set when the month was written past its freeze deadline. A frozen month
    /// never changes again.
    #[serde(default)]
    pub frozen: bool,
}

/// The months of one year inside the cache document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YearReports {
    /// Months keyed by 1-based month number.
    #[serde(default)]
    pub months: BTreeMap<u32, MonthReport>,
}

/// Per-user report cache document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCacheEntry {
    /// Owning user.
    #[serde(rename = "userid")]
    pub user_id: UserId,
    /// Sparse years keyed by calendar year.
    #[serde(default)]
    pub years: BTreeMap<i32, YearReports>,
}

impl ReportCacheEntry {
    /// An empty document for `user_id`.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            years: BTreeMap::new(),
        }
    }

    /// The cached month, if present.
    #[must_use]
    pub fn month(&self, period: &MonthPeriod) -> Option<&MonthReport> {
        self.years
            .get(&period.year())
            .and_then(|y| y.months.get(&period.month()))
    }

    /// Store `costs` for `period` as a frozen month, creating the year and month
    /// levels as needed.
    pub fn freeze_month(&mut self, period: &MonthPeriod, costs: CategoryBreakdown) {
        self.years.entry(period.year()).or_default().months.insert(
            period.month(),
            MonthReport {
                costs,
                frozen: true,
            },
        );
    }

    /// Push `summary` onto `category` of a cached month that is not frozen.
    ///
    /// Returns `false` without changes when the month is absent or frozen.
    pub fn append(
        &mut self,
        period: &MonthPeriod,
        category: Category,
        summary: CostSummary,
    ) -> bool {
        let month = self
            .years
            .get_mut(&period.year())
            .and_then(|y| y.months.get_mut(&period.month()));
        match month {
            Some(month) if !month.frozen => {
                month.costs.push(category, summary);
                true
            }
            _ => false,
        }
    }
}

/// A user's report for one month, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Owning user.
    pub userid: UserId,
    /// Calendar year.
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    /// Costs grouped by category.
    pub costs: CategoryBreakdown,
}

impl MonthlyReport {
    /// Wrap a breakdown for `user_id` and `period`.
    #[must_use]
    pub fn new(user_id: UserId, period: &MonthPeriod, costs: CategoryBreakdown) -> Self {
        Self {
            userid: user_id,
            year: period.year(),
            month: period.month(),
            costs,
        }
    }
}
