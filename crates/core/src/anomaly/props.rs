//! Property-based tests for anomaly detection.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use soldi_shared::config::AnomalyConfig;
use soldi_shared::types::TransactionId;

use super::detector::{AnomalyDetector, SpendBaselines};
use crate::transaction::NormalizedTransaction;

const MERCHANTS: &[&str] = &["Alpha", "Bravo", "Charlie"];
const LEAVES: &[&str] = &["groceries", "fuel", "streaming"];

fn tx_strategy() -> impl Strategy<Value = NormalizedTransaction> {
    (0..MERCHANTS.len(), 0..LEAVES.len(), 1i64..50_000_00).prop_map(
        |(merchant, leaf, cents)| {
            let net = Decimal::new(cents, 2);
            NormalizedTransaction {
                id: TransactionId::new(),
                date: NaiveDate::from_ymd_opt(2026, 6, 10).unwrap(),
                gross: net,
                reimbursed: Decimal::ZERO,
                net,
                leaf_category: LEAVES[leaf].to_string(),
                merchant: MERCHANTS[merchant].to_string(),
                instrument: None,
                is_spend: true,
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// No transaction below the absolute floor is ever flagged, regardless
    /// of its ratio to baseline.
    #[test]
    fn prop_floor_is_never_bypassed(
        history in prop::collection::vec(tx_strategy(), 0..20),
        current in prop::collection::vec(tx_strategy(), 0..20),
        floor_cents in 1i64..100_000_00,
    ) {
        let config = AnomalyConfig {
            absolute_floor: Decimal::new(floor_cents, 2),
            ..AnomalyConfig::default()
        };
        let baselines = SpendBaselines::from_history(&history);
        let anomalies = AnomalyDetector::detect(&current, &baselines, &config);

        for anomaly in &anomalies {
            prop_assert!(
                anomaly.amount >= config.absolute_floor,
                "flagged {} below floor {}",
                anomaly.amount,
                config.absolute_floor
            );
        }
    }

    /// At most one record per transaction.
    #[test]
    fn prop_one_record_per_transaction(
        history in prop::collection::vec(tx_strategy(), 0..20),
        current in prop::collection::vec(tx_strategy(), 0..20),
    ) {
        let baselines = SpendBaselines::from_history(&history);
        let anomalies = AnomalyDetector::detect(&current, &baselines, &AnomalyConfig::default());

        let mut ids: Vec<_> = anomalies.iter().map(|a| a.transaction_id).collect();
        ids.sort_by_key(|id| id.into_inner());
        ids.dedup();
        prop_assert_eq!(ids.len(), anomalies.len());
    }

    /// Output is ranked by amount descending and fully deterministic.
    #[test]
    fn prop_ranked_and_deterministic(
        history in prop::collection::vec(tx_strategy(), 0..20),
        current in prop::collection::vec(tx_strategy(), 0..20),
    ) {
        let baselines = SpendBaselines::from_history(&history);
        let config = AnomalyConfig::default();

        let first = AnomalyDetector::detect(&current, &baselines, &config);
        let second = AnomalyDetector::detect(&current, &baselines, &config);
        prop_assert_eq!(&first, &second);

        for pair in first.windows(2) {
            prop_assert!(pair[0].amount >= pair[1].amount);
        }
    }
}
