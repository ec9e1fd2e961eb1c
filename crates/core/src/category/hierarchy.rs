//! Hierarchical spend breakdown with thresholded "Other" grouping.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::taxonomy::ParentCategory;
use crate::transaction::NormalizedTransaction;

/// Name of the synthetic bucket that collects below-cutoff siblings.
///
/// Distinct from [`ParentCategory::Uncategorized`], which is the taxonomy
/// fallback for unmapped leaf names.
pub const OTHER_BUCKET: &str = "Other";

/// One node of the category hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Display name of the node.
    pub name: String,
    /// Net amount aggregated under this node.
    pub amount: Decimal,
    /// Share of the immediate total, in percent (0 when the total is 0).
    pub percentage: Decimal,
    /// Child nodes, ordered by amount descending, "Other" always last.
    pub children: Vec<CategoryNode>,
}

/// The full Parent → Subcategory → Merchant rollup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTree {
    /// Total net spend across all parents.
    pub total: Decimal,
    /// Parent-level nodes.
    pub categories: Vec<CategoryNode>,
}

/// Builds the category hierarchy from normalized spend transactions.
///
/// A pure function of (transactions, cutoff): the same input always yields
/// the same tree.
pub struct HierarchyBuilder;

impl HierarchyBuilder {
    /// Aggregates positive-spend transactions into the three-level tree.
    ///
    /// At every level, nodes whose share of the immediate total falls below
    /// `cutoff_percent` merge into a synthetic "Other" bucket that is always
    /// ordered last and never split further.
    #[must_use]
    pub fn build(transactions: &[NormalizedTransaction], cutoff_percent: Decimal) -> CategoryTree {
        // parent -> leaf -> merchant -> amount, BTreeMap so grouping order
        // is independent of input order.
        let mut groups: BTreeMap<&'static str, BTreeMap<String, BTreeMap<String, Decimal>>> =
            BTreeMap::new();

        for tx in transactions.iter().filter(|tx| tx.is_spend) {
            let parent = ParentCategory::from_leaf(&tx.leaf_category).display_name();
            let merchant = if tx.merchant.is_empty() {
                "Unknown merchant".to_string()
            } else {
                tx.merchant.clone()
            };
            *groups
                .entry(parent)
                .or_default()
                .entry(tx.leaf_category.to_lowercase())
                .or_default()
                .entry(merchant)
                .or_default() += tx.net;
        }

        let mut parents = Vec::with_capacity(groups.len());
        for (parent_name, leaves) in groups {
            let mut leaf_nodes = Vec::with_capacity(leaves.len());
            for (leaf_name, merchants) in leaves {
                let merchant_nodes: Vec<CategoryNode> = merchants
                    .into_iter()
                    .map(|(name, amount)| CategoryNode {
                        name,
                        amount,
                        percentage: Decimal::ZERO,
                        children: Vec::new(),
                    })
                    .collect();
                let amount = merchant_nodes.iter().map(|n| n.amount).sum();
                leaf_nodes.push(CategoryNode {
                    name: leaf_name,
                    amount,
                    percentage: Decimal::ZERO,
                    children: Self::finalize_level(merchant_nodes, amount, cutoff_percent),
                });
            }
            let amount = leaf_nodes.iter().map(|n| n.amount).sum();
            parents.push(CategoryNode {
                name: parent_name.to_string(),
                amount,
                percentage: Decimal::ZERO,
                children: Self::finalize_level(leaf_nodes, amount, cutoff_percent),
            });
        }

        let total = parents.iter().map(|n| n.amount).sum();
        CategoryTree {
            total,
            categories: Self::finalize_level(parents, total, cutoff_percent),
        }
    }

    /// Sorts one level, assigns percentages of `level_total`, and merges
    /// below-cutoff nodes into the trailing "Other" bucket.
    fn finalize_level(
        mut nodes: Vec<CategoryNode>,
        level_total: Decimal,
        cutoff_percent: Decimal,
    ) -> Vec<CategoryNode> {
        nodes.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));

        if level_total <= Decimal::ZERO {
            for node in &mut nodes {
                node.percentage = Decimal::ZERO;
            }
            return nodes;
        }

        let share = |amount: Decimal| amount / level_total * Decimal::ONE_HUNDRED;

        let (mut kept, merged): (Vec<CategoryNode>, Vec<CategoryNode>) = nodes
            .into_iter()
            .partition(|node| share(node.amount) >= cutoff_percent);

        for node in &mut kept {
            node.percentage = share(node.amount).round_dp(2);
        }

        if !merged.is_empty() {
            let amount = merged.iter().map(|n| n.amount).sum();
            kept.push(CategoryNode {
                name: OTHER_BUCKET.to_string(),
                amount,
                percentage: share(amount).round_dp(2),
                children: Vec::new(),
            });
        }

        kept
    }
}
