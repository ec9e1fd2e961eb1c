//! Metrics data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::ParentCategory;

/// Change of net spend versus the comparable previous window.
///
/// Convention: when the previous window had no net spend and the current one
/// does, the change is the `New` sentinel, never a numeric ratio, so
/// consumers can never observe NaN or infinity. When both windows are empty
/// the change is `Percent(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageChange {
    /// Spending appeared in a window with no comparable history.
    New,
    /// Numeric percentage change, rounded to 2 decimal places.
    Percent(Decimal),
}

impl PercentageChange {
    /// Computes the change between two net amounts.
    #[must_use]
    pub fn between(current: Decimal, previous: Decimal) -> Self {
        if previous <= Decimal::ZERO {
            if current > Decimal::ZERO {
                Self::New
            } else {
                Self::Percent(Decimal::ZERO)
            }
        } else {
            Self::Percent(((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(2))
        }
    }
}

/// Single-pass totals for one reporting window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowTotals {
    /// Sum of converted gross amounts of spend transactions.
    pub total_expenses: Decimal,
    /// Sum of converted reimbursements of spend transactions.
    pub total_reimbursed: Decimal,
    /// Gross minus reimbursed.
    pub net_expenses: Decimal,
    /// Number of spend transactions.
    pub transaction_count: u64,
}

/// Scalar summary metrics for the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingMetrics {
    /// Sum of converted gross amounts of spend transactions.
    pub total_expenses: Decimal,
    /// Sum of converted reimbursements.
    pub total_reimbursed: Decimal,
    /// Gross minus reimbursed.
    pub net_expenses: Decimal,
    /// Number of spend transactions.
    pub transaction_count: u64,
    /// Mean gross amount per spend transaction (0 when the window is empty).
    pub average_amount: Decimal,
    /// Net change versus the comparable previous window.
    pub percentage_change: PercentageChange,
}

/// Merchant with the highest net spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopMerchant {
    /// Merchant name.
    pub name: String,
    /// Net spend at this merchant.
    pub net_spend: Decimal,
}

/// Parent category with the largest share of net spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCategory {
    /// The parent category.
    pub category: ParentCategory,
    /// Net spend in this category.
    pub amount: Decimal,
    /// Share of the window's net spend, in percent.
    pub share_percent: Decimal,
}

/// Payment instrument with the most spend transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopInstrument {
    /// Instrument display label.
    pub label: String,
    /// Number of spend transactions on this instrument.
    pub usage_count: u64,
}

/// Top-N leaderboards for the current window. Ties are broken by
/// first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboards {
    /// Top merchant by net spend.
    pub merchant: Option<TopMerchant>,
    /// Top parent category by share of net spend.
    pub category: Option<TopCategory>,
    /// Top payment instrument by usage count.
    pub instrument: Option<TopInstrument>,
}
