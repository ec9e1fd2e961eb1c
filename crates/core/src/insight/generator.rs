//! Insight generation rules.
//!
//! A pure transformation over metrics, pace, and anomalies. Dismissal and
//! acknowledgement state is owned entirely by the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use soldi_shared::types::TransactionId;

use crate::anomaly::{Anomaly, AnomalySeverity};
use crate::budget::{BudgetPace, PaceStatus};
use crate::metrics::{Leaderboards, PercentageChange, SpendingMetrics};

/// Number of anomalies surfaced as individual insights.
const MAX_ANOMALY_INSIGHTS: usize = 3;

/// Net-change increase (percent) beyond which a spending-up insight fires.
const SPEND_UP_PERCENT: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Net-change decrease (percent) beyond which a spending-down note fires.
const SPEND_DOWN_PERCENT: Decimal = Decimal::from_parts(10, 0, 0, true, 0);

/// Category share (percent) beyond which a concentration tip fires.
const CONCENTRATION_PERCENT: Decimal = Decimal::from_parts(35, 0, 0, false, 0);

/// Insight severity tiers, ranked ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    /// Informational note.
    Low,
    /// Worth a look.
    Medium,
    /// Needs attention.
    High,
}

/// Reference the caller can wire to a navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightAction {
    /// Open the budget settings.
    ReviewBudget,
    /// Open a specific transaction.
    ReviewTransaction(TransactionId),
    /// Open a category breakdown.
    ReviewCategory(String),
}

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Severity tier.
    pub severity: InsightSeverity,
    /// Short title.
    pub title: String,
    /// Human-readable message.
    pub message: String,
    /// Optional navigation reference.
    pub action: Option<InsightAction>,
}

/// Turns engine outputs into ranked recommendations.
pub struct InsightGenerator;

impl InsightGenerator {
    /// Generates the ranked insight list.
    ///
    /// Ranking is by severity descending; insights of equal severity keep
    /// their rule order, so output is deterministic.
    #[must_use]
    pub fn generate(
        metrics: &SpendingMetrics,
        leaderboards: &Leaderboards,
        pace: Option<&BudgetPace>,
        anomalies: &[Anomaly],
    ) -> Vec<Insight> {
        let mut insights = Vec::new();

        if let Some(pace) = pace {
            match pace.status {
                PaceStatus::OverBudget => insights.push(Insight {
                    severity: InsightSeverity::High,
                    title: "Budget exceeded".to_string(),
                    message: format!(
                        "Net expenses of {} have passed the {} budget for this window",
                        metrics.net_expenses, pace.scaled_budget
                    ),
                    action: Some(InsightAction::ReviewBudget),
                }),
                PaceStatus::AheadOfPace => insights.push(Insight {
                    severity: InsightSeverity::Medium,
                    title: "Spending ahead of pace".to_string(),
                    message: format!(
                        "At the current rate spending projects to {}, against a budget of {}",
                        pace.projection, pace.scaled_budget
                    ),
                    action: Some(InsightAction::ReviewBudget),
                }),
                PaceStatus::OnTrack => {}
            }
        }

        for anomaly in anomalies.iter().take(MAX_ANOMALY_INSIGHTS) {
            insights.push(Insight {
                severity: match anomaly.severity {
                    AnomalySeverity::High => InsightSeverity::High,
                    AnomalySeverity::Medium => InsightSeverity::Medium,
                    AnomalySeverity::Low => InsightSeverity::Low,
                },
                title: format!("Unusual transaction at {}", anomaly.merchant),
                message: format!("{} ({})", anomaly.reason, anomaly.amount),
                action: Some(InsightAction::ReviewTransaction(anomaly.transaction_id)),
            });
        }

        match metrics.percentage_change {
            PercentageChange::New => insights.push(Insight {
                severity: InsightSeverity::Medium,
                title: "New spending".to_string(),
                message: "This window has spending where the previous one had none".to_string(),
                action: None,
            }),
            PercentageChange::Percent(change) if change > SPEND_UP_PERCENT => {
                insights.push(Insight {
                    severity: InsightSeverity::Medium,
                    title: "Spending is up".to_string(),
                    message: format!("Net expenses rose {change}% versus the previous window"),
                    action: None,
                });
            }
            PercentageChange::Percent(change) if change < SPEND_DOWN_PERCENT => {
                insights.push(Insight {
                    severity: InsightSeverity::Low,
                    title: "Spending is down".to_string(),
                    message: format!(
                        "Net expenses fell {}% versus the previous window",
                        change.abs()
                    ),
                    action: None,
                });
            }
            PercentageChange::Percent(_) => {}
        }

        if let Some(category) = &leaderboards.category {
            if category.share_percent >= CONCENTRATION_PERCENT {
                insights.push(Insight {
                    severity: InsightSeverity::Low,
                    title: format!("{} dominates spending", category.category.display_name()),
                    message: format!(
                        "{}% of net expenses went to {}",
                        category.share_percent,
                        category.category.display_name()
                    ),
                    action: Some(InsightAction::ReviewCategory(
                        category.category.id().to_string(),
                    )),
                });
            }
        }

        insights.sort_by_key(|insight| std::cmp::Reverse(insight.severity));
        insights
    }
}
