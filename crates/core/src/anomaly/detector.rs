//! Heuristic outlier detection against category/merchant baselines.
//!
//! False positives and negatives are acceptable; the hard guarantees are
//! determinism (same input, same output) and that the absolute floor is
//! never bypassed by ratio alone.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use soldi_shared::config::AnomalyConfig;
use soldi_shared::types::TransactionId;
use tracing::warn;

use crate::transaction::NormalizedTransaction;

/// Anomaly severity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    /// Qualifying heuristic without baseline support (e.g. first-ever large
    /// purchase at a new merchant).
    Low,
    /// 3-5x the baseline.
    Medium,
    /// More than 5x the baseline.
    High,
}

/// One flagged transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    /// The flagged transaction.
    pub transaction_id: TransactionId,
    /// Severity tier.
    pub severity: AnomalySeverity,
    /// Human-readable reason.
    pub reason: String,
    /// Net amount of the transaction in the display currency.
    pub amount: Decimal,
    /// Merchant name.
    pub merchant: String,
    /// Leaf category name.
    pub category: String,
}

/// Mean spend per leaf category and per merchant over the comparison window.
#[derive(Debug, Clone, Default)]
pub struct SpendBaselines {
    category_means: HashMap<String, Decimal>,
    merchant_means: HashMap<String, Decimal>,
}

impl SpendBaselines {
    /// Builds baselines from the comparison window's spend transactions.
    #[must_use]
    pub fn from_history(history: &[NormalizedTransaction]) -> Self {
        let mut categories: HashMap<String, (Decimal, u64)> = HashMap::new();
        let mut merchants: HashMap<String, (Decimal, u64)> = HashMap::new();

        for tx in history.iter().filter(|tx| tx.is_spend) {
            let category = categories
                .entry(tx.leaf_category.to_lowercase())
                .or_insert((Decimal::ZERO, 0));
            category.0 += tx.net;
            category.1 += 1;

            if !tx.merchant.is_empty() {
                let merchant = merchants
                    .entry(tx.merchant.to_lowercase())
                    .or_insert((Decimal::ZERO, 0));
                merchant.0 += tx.net;
                merchant.1 += 1;
            }
        }

        let mean = |(sum, count): (Decimal, u64)| sum / Decimal::from(count.max(1));
        Self {
            category_means: categories.into_iter().map(|(k, v)| (k, mean(v))).collect(),
            merchant_means: merchants.into_iter().map(|(k, v)| (k, mean(v))).collect(),
        }
    }

    /// Baseline for a transaction: merchant mean when available, else the
    /// category mean.
    #[must_use]
    pub fn for_transaction(&self, tx: &NormalizedTransaction) -> Option<Decimal> {
        self.merchant_means
            .get(tx.merchant.to_lowercase().as_str())
            .or_else(|| self.category_means.get(tx.leaf_category.to_lowercase().as_str()))
            .copied()
    }
}

/// Flags transactions that deviate sharply from their baseline.
pub struct AnomalyDetector;

impl AnomalyDetector {
    /// Detects anomalies in the current window against baselines from the
    /// comparison window.
    ///
    /// Misconfiguration (non-positive thresholds, negative floor) is
    /// non-fatal: the detector logs a diagnostic and returns an empty list.
    /// Output carries at most one record per transaction, ranked by amount
    /// descending.
    #[must_use]
    pub fn detect(
        current: &[NormalizedTransaction],
        baselines: &SpendBaselines,
        config: &AnomalyConfig,
    ) -> Vec<Anomaly> {
        if config.spike_ratio <= Decimal::ZERO
            || config.high_ratio < config.spike_ratio
            || config.absolute_floor < Decimal::ZERO
        {
            warn!(
                spike_ratio = %config.spike_ratio,
                high_ratio = %config.high_ratio,
                absolute_floor = %config.absolute_floor,
                "invalid anomaly configuration, skipping detection"
            );
            return Vec::new();
        }

        let mut anomalies: Vec<Anomaly> = current
            .iter()
            .filter(|tx| tx.is_spend)
            .filter_map(|tx| Self::evaluate(tx, baselines, config))
            .collect();

        // Stable: ties keep input order.
        anomalies.sort_by(|a, b| b.amount.cmp(&a.amount));
        anomalies
    }

    fn evaluate(
        tx: &NormalizedTransaction,
        baselines: &SpendBaselines,
        config: &AnomalyConfig,
    ) -> Option<Anomaly> {
        // The absolute floor keeps trivially small categories quiet and is
        // never bypassed by ratio alone.
        if tx.net < config.absolute_floor {
            return None;
        }

        match baselines.for_transaction(tx) {
            Some(baseline) if baseline > Decimal::ZERO => {
                let ratio = tx.net / baseline;
                if ratio <= config.spike_ratio {
                    return None;
                }
                let severity = if ratio > config.high_ratio {
                    AnomalySeverity::High
                } else {
                    AnomalySeverity::Medium
                };
                Some(Anomaly {
                    transaction_id: tx.id,
                    severity,
                    reason: format!(
                        "Amount is {}x the typical spend for {}",
                        ratio.round_dp(1),
                        if baselines
                            .merchant_means
                            .contains_key(tx.merchant.to_lowercase().as_str())
                        {
                            &tx.merchant
                        } else {
                            &tx.leaf_category
                        }
                    ),
                    amount: tx.net,
                    merchant: tx.merchant.clone(),
                    category: tx.leaf_category.clone(),
                })
            }
            Some(_) => None,
            None => Some(Anomaly {
                transaction_id: tx.id,
                severity: AnomalySeverity::Low,
                reason: format!("First sizeable purchase at new merchant {}", tx.merchant),
                amount: tx.net,
                merchant: tx.merchant.clone(),
                category: tx.leaf_category.clone(),
            }),
        }
    }
}
