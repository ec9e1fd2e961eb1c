//! Dashboard report types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use soldi_shared::types::Currency;

use crate::anomaly::Anomaly;
use crate::budget::BudgetPace;
use crate::category::CategoryTree;
use crate::insight::Insight;
use crate::metrics::{Leaderboards, SpendingMetrics};
use crate::timeframe::{Timeframe, WindowPair};

/// The complete analytics result for one snapshot and timeframe.
///
/// Plain immutable data: no locale or formatting logic, no nulls. An empty
/// window produces zeroed metrics and an empty tree, never a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// The selected timeframe.
    pub timeframe: Timeframe,
    /// Resolved current and previous windows.
    pub windows: WindowPair,
    /// The "now" date the report was resolved against.
    pub generated_for: NaiveDate,
    /// Currency all amounts are normalized into.
    pub display_currency: Currency,
    /// Scalar summary metrics for the current window.
    pub metrics: SpendingMetrics,
    /// Top merchant/category/instrument leaderboards.
    pub leaderboards: Leaderboards,
    /// Parent → Subcategory → Merchant rollup.
    pub category_tree: CategoryTree,
    /// Budget pace, when a valid budget is configured.
    pub pace: Option<BudgetPace>,
    /// Anomalies ranked by amount descending.
    pub anomalies: Vec<Anomaly>,
    /// Ranked recommendations.
    pub insights: Vec<Insight>,
    /// Malformed records excluded during normalization.
    pub skipped_transactions: usize,
    /// Content fingerprint of the inputs that produced this report.
    pub fingerprint: String,
    /// Whether this report came from the memoization cache.
    pub cached: bool,
}
