//! Single-pass aggregation over normalized transactions.

use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;

use super::types::{
    Leaderboards, PercentageChange, SpendingMetrics, TopCategory, TopInstrument, TopMerchant,
    WindowTotals,
};
use crate::category::ParentCategory;
use crate::currency::conversion::round_bankers;
use crate::transaction::NormalizedTransaction;

/// One bucket of a rollup: the grouping key, summed net spend, and the
/// number of transactions that hit the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupEntry<K> {
    /// Grouping key.
    pub key: K,
    /// Summed net spend for the key.
    pub sum: Decimal,
    /// Number of spend transactions for the key.
    pub count: u64,
}

/// Computes summary metrics and leaderboards.
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Sums a window's spend transactions in input order, one pass.
    #[must_use]
    pub fn window_totals(transactions: &[NormalizedTransaction]) -> WindowTotals {
        let mut totals = WindowTotals::default();
        for tx in transactions.iter().filter(|tx| tx.is_spend) {
            totals.total_expenses += tx.gross;
            totals.total_reimbursed += tx.reimbursed;
            totals.transaction_count += 1;
        }
        totals.net_expenses = totals.total_expenses - totals.total_reimbursed;
        totals
    }

    /// Builds the summary metrics from current and previous window totals.
    ///
    /// Every ratio is division-by-zero guarded: an empty window yields a
    /// zeroed average and the documented percentage-change convention.
    #[must_use]
    pub fn summarize(current: &WindowTotals, previous: &WindowTotals) -> SpendingMetrics {
        let average_amount = if current.transaction_count == 0 {
            Decimal::ZERO
        } else {
            round_bankers(
                current.total_expenses / Decimal::from(current.transaction_count),
                4,
            )
        };

        SpendingMetrics {
            total_expenses: current.total_expenses,
            total_reimbursed: current.total_reimbursed,
            net_expenses: current.net_expenses,
            transaction_count: current.transaction_count,
            average_amount,
            percentage_change: PercentageChange::between(
                current.net_expenses,
                previous.net_expenses,
            ),
        }
    }

    /// Groups spend transactions by an extracted key, one O(n) pass.
    ///
    /// Entries come back in first-encountered order, which downstream
    /// leader selection relies on for deterministic tie-breaking.
    /// Transactions for which the extractor returns `None` are skipped.
    pub fn rollup_by<K, F>(transactions: &[NormalizedTransaction], mut key: F) -> Vec<RollupEntry<K>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&NormalizedTransaction) -> Option<K>,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<RollupEntry<K>> = Vec::new();

        for tx in transactions.iter().filter(|tx| tx.is_spend) {
            let Some(key) = key(tx) else { continue };
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                entries.push(RollupEntry {
                    key,
                    sum: Decimal::ZERO,
                    count: 0,
                });
                entries.len() - 1
            });
            entries[slot].sum += tx.net;
            entries[slot].count += 1;
        }

        entries
    }

    /// Computes the three leaderboards for a window.
    #[must_use]
    pub fn leaderboards(transactions: &[NormalizedTransaction]) -> Leaderboards {
        let net_total: Decimal = transactions
            .iter()
            .filter(|tx| tx.is_spend)
            .map(|tx| tx.net)
            .sum();

        let merchant = Self::leader(
            Self::rollup_by(transactions, |tx| {
                (!tx.merchant.is_empty()).then(|| tx.merchant.clone())
            }),
            |entry| entry.sum,
        )
        .map(|entry| TopMerchant {
            name: entry.key,
            net_spend: entry.sum,
        });

        let category = Self::leader(
            Self::rollup_by(transactions, |tx| {
                Some(ParentCategory::from_leaf(&tx.leaf_category))
            }),
            |entry| entry.sum,
        )
        .map(|entry| TopCategory {
            category: entry.key,
            amount: entry.sum,
            share_percent: if net_total > Decimal::ZERO {
                (entry.sum / net_total * Decimal::ONE_HUNDRED).round_dp(2)
            } else {
                Decimal::ZERO
            },
        });

        let instrument = Self::leader(
            Self::rollup_by(transactions, |tx| {
                tx.instrument.as_ref().map(|i| i.label.clone())
            }),
            |entry| Decimal::from(entry.count),
        )
        .map(|entry| TopInstrument {
            label: entry.key,
            usage_count: entry.count,
        });

        Leaderboards {
            merchant,
            category,
            instrument,
        }
    }

    /// Picks the entry with the largest measure. Strictly-greater comparison
    /// keeps the first-encountered entry on ties.
    fn leader<K>(
        entries: Vec<RollupEntry<K>>,
        measure: impl Fn(&RollupEntry<K>) -> Decimal,
    ) -> Option<RollupEntry<K>> {
        let mut best: Option<RollupEntry<K>> = None;
        for entry in entries {
            match &best {
                Some(current) if measure(&entry) <= measure(current) => {}
                _ => best = Some(entry),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use soldi_shared::types::{InstrumentId, TransactionId};
    use crate::transaction::PaymentInstrument;

    fn tx(merchant: &str, leaf: &str, gross: Decimal, reimbursed: Decimal) -> NormalizedTransaction {
        NormalizedTransaction {
            id: TransactionId::new(),
            date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            gross,
            reimbursed,
            net: gross - reimbursed,
            leaf_category: leaf.to_string(),
            merchant: merchant.to_string(),
            instrument: None,
            is_spend: gross > Decimal::ZERO,
        }
    }

    fn with_instrument(mut t: NormalizedTransaction, label: &str) -> NormalizedTransaction {
        t.instrument = Some(PaymentInstrument {
            id: InstrumentId::new(),
            label: label.to_string(),
        });
        t
    }

    #[test]
    fn test_window_totals() {
        let txs = vec![
            tx("A", "groceries", dec!(100), dec!(20)),
            tx("B", "fuel", dec!(50), dec!(0)),
            tx("C", "groceries", dec!(-30), dec!(0)), // refund, excluded
        ];
        let totals = MetricsAggregator::window_totals(&txs);
        assert_eq!(totals.total_expenses, dec!(150));
        assert_eq!(totals.total_reimbursed, dec!(20));
        assert_eq!(totals.net_expenses, dec!(130));
        assert_eq!(totals.transaction_count, 2);
    }

    #[test]
    fn test_summarize_average_and_change() {
        let current = WindowTotals {
            total_expenses: dec!(150),
            total_reimbursed: dec!(0),
            net_expenses: dec!(150),
            transaction_count: 2,
        };
        let previous = WindowTotals {
            total_expenses: dec!(100),
            total_reimbursed: dec!(0),
            net_expenses: dec!(100),
            transaction_count: 1,
        };
        let metrics = MetricsAggregator::summarize(&current, &previous);
        assert_eq!(metrics.average_amount, dec!(75.0000));
        assert_eq!(metrics.percentage_change, PercentageChange::Percent(dec!(50.00)));
    }

    #[test]
    fn test_summarize_empty_window_is_zeroed() {
        let metrics =
            MetricsAggregator::summarize(&WindowTotals::default(), &WindowTotals::default());
        assert_eq!(metrics.average_amount, dec!(0));
        assert_eq!(metrics.transaction_count, 0);
        assert_eq!(metrics.percentage_change, PercentageChange::Percent(dec!(0)));
    }

    #[test]
    fn test_summarize_new_sentinel() {
        let current = WindowTotals {
            total_expenses: dec!(200),
            total_reimbursed: dec!(0),
            net_expenses: dec!(200),
            transaction_count: 1,
        };
        let metrics = MetricsAggregator::summarize(&current, &WindowTotals::default());
        assert_eq!(metrics.percentage_change, PercentageChange::New);
    }

    #[test]
    fn test_top_merchant_by_net_spend() {
        let txs = vec![
            tx("Corner Market", "groceries", dec!(60), dec!(0)),
            tx("Gas & Go", "fuel", dec!(80), dec!(0)),
            tx("Corner Market", "groceries", dec!(30), dec!(0)),
        ];
        let boards = MetricsAggregator::leaderboards(&txs);
        let merchant = boards.merchant.unwrap();
        assert_eq!(merchant.name, "Corner Market");
        assert_eq!(merchant.net_spend, dec!(90));
    }

    #[test]
    fn test_top_category_share() {
        let txs = vec![
            tx("A", "groceries", dec!(75), dec!(0)),
            tx("B", "fuel", dec!(25), dec!(0)),
        ];
        let boards = MetricsAggregator::leaderboards(&txs);
        let category = boards.category.unwrap();
        assert_eq!(category.category, ParentCategory::FoodDining);
        assert_eq!(category.share_percent, dec!(75.00));
    }

    #[test]
    fn test_top_instrument_by_usage_count() {
        let txs = vec![
            with_instrument(tx("A", "groceries", dec!(5), dec!(0)), "Amber Card"),
            with_instrument(tx("B", "fuel", dec!(500), dec!(0)), "Slate Card"),
            with_instrument(tx("C", "groceries", dec!(5), dec!(0)), "Amber Card"),
        ];
        let boards = MetricsAggregator::leaderboards(&txs);
        let instrument = boards.instrument.unwrap();
        // Usage count, not amount, decides the leader.
        assert_eq!(instrument.label, "Amber Card");
        assert_eq!(instrument.usage_count, 2);
    }

    #[test]
    fn test_leader_tie_broken_by_first_encountered() {
        let txs = vec![
            tx("Bravo", "groceries", dec!(50), dec!(0)),
            tx("Alpha", "fuel", dec!(50), dec!(0)),
        ];
        let boards = MetricsAggregator::leaderboards(&txs);
        assert_eq!(boards.merchant.unwrap().name, "Bravo");
    }

    #[test]
    fn test_empty_window_has_no_leaders() {
        let boards = MetricsAggregator::leaderboards(&[]);
        assert!(boards.merchant.is_none());
        assert!(boards.category.is_none());
        assert!(boards.instrument.is_none());
    }

    #[test]
    fn test_rollup_skips_none_keys() {
        let txs = vec![
            tx("", "groceries", dec!(10), dec!(0)),
            tx("Named", "fuel", dec!(5), dec!(0)),
        ];
        let entries = MetricsAggregator::rollup_by(&txs, |tx| {
            (!tx.merchant.is_empty()).then(|| tx.merchant.clone())
        });
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "Named");
    }
}
