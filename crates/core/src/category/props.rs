//! Property-based tests for the category hierarchy.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use soldi_shared::types::TransactionId;

use super::hierarchy::{CategoryNode, HierarchyBuilder, OTHER_BUCKET};
use crate::transaction::NormalizedTransaction;

const LEAVES: &[&str] = &[
    "groceries",
    "restaurants",
    "fuel",
    "streaming",
    "rent",
    "gym",
    "flights",
    "mystery leaf",
];
const MERCHANTS: &[&str] = &["Alpha", "Bravo", "Charlie", "Delta"];

fn spend_strategy() -> impl Strategy<Value = NormalizedTransaction> {
    (0..LEAVES.len(), 0..MERCHANTS.len(), 1i64..10_000_00).prop_map(|(leaf, merchant, cents)| {
        let net = Decimal::new(cents, 2);
        NormalizedTransaction {
            id: TransactionId::new(),
            date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            gross: net,
            reimbursed: Decimal::ZERO,
            net,
            leaf_category: LEAVES[leaf].to_string(),
            merchant: MERCHANTS[merchant].to_string(),
            instrument: None,
            is_spend: true,
        }
    })
}

/// Walks every level of the tree, applying `check` to (nodes, level_total).
fn for_each_level(nodes: &[CategoryNode], level_total: Decimal, check: &impl Fn(&[CategoryNode], Decimal)) {
    check(nodes, level_total);
    for node in nodes {
        if !node.children.is_empty() {
            for_each_level(&node.children, node.amount, check);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Child amounts at every level sum exactly to their parent's amount.
    #[test]
    fn prop_child_amounts_sum_to_parent(
        txs in prop::collection::vec(spend_strategy(), 1..40),
        cutoff in 0i64..15,
    ) {
        let tree = HierarchyBuilder::build(&txs, Decimal::from(cutoff));

        let expected: Decimal = txs.iter().map(|tx| tx.net).sum();
        prop_assert_eq!(tree.total, expected);

        for_each_level(&tree.categories, tree.total, &|nodes, level_total| {
            let sum: Decimal = nodes.iter().map(|n| n.amount).sum();
            assert_eq!(sum, level_total, "level does not sum to its parent");
        });
    }

    /// Sibling percentages at every level sum to 100 within epsilon.
    #[test]
    fn prop_percentages_sum_to_100(
        txs in prop::collection::vec(spend_strategy(), 1..40),
        cutoff in 0i64..15,
    ) {
        let tree = HierarchyBuilder::build(&txs, Decimal::from(cutoff));
        let epsilon = Decimal::new(1, 1); // 0.1

        for_each_level(&tree.categories, tree.total, &|nodes, _| {
            let sum: Decimal = nodes.iter().map(|n| n.percentage).sum();
            assert!(
                (sum - Decimal::ONE_HUNDRED).abs() <= epsilon,
                "percentages sum to {sum}"
            );
        });
    }

    /// "Other" appears iff at least one sibling fell below the cutoff: every
    /// kept node meets the cutoff, and when no "Other" is present the level
    /// was complete to begin with.
    #[test]
    fn prop_other_iff_below_cutoff_sibling(
        txs in prop::collection::vec(spend_strategy(), 1..40),
        cutoff in 1i64..15,
    ) {
        let cutoff = Decimal::from(cutoff);
        let tree = HierarchyBuilder::build(&txs, cutoff);

        for_each_level(&tree.categories, tree.total, &|nodes, level_total| {
            if level_total <= Decimal::ZERO {
                return;
            }
            for node in nodes {
                if node.name != OTHER_BUCKET {
                    let share = node.amount / level_total * Decimal::ONE_HUNDRED;
                    assert!(
                        share >= cutoff,
                        "kept node {} has share {share} below cutoff {cutoff}",
                        node.name
                    );
                }
            }
            if let Some(other) = nodes.iter().find(|n| n.name == OTHER_BUCKET) {
                assert!(other.amount > Decimal::ZERO);
                assert_eq!(
                    nodes.iter().position(|n| n.name == OTHER_BUCKET),
                    Some(nodes.len() - 1),
                    "Other must be ordered last"
                );
            }
        });
    }

    /// The builder is a pure function: identical input yields identical output.
    #[test]
    fn prop_idempotent(
        txs in prop::collection::vec(spend_strategy(), 0..25),
        cutoff in 0i64..15,
    ) {
        let first = HierarchyBuilder::build(&txs, Decimal::from(cutoff));
        let second = HierarchyBuilder::build(&txs, Decimal::from(cutoff));
        prop_assert_eq!(first, second);
    }
}
