//! Dashboard report generation.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use soldi_shared::config::AppConfig;
use tracing::warn;

use super::types::DashboardReport;
use crate::anomaly::{AnomalyDetector, SpendBaselines};
use crate::budget::{BudgetConfig, BudgetPacer, BudgetStore};
use crate::category::HierarchyBuilder;
use crate::currency::{CurrencyConverter, RateTable};
use crate::insight::InsightGenerator;
use crate::metrics::MetricsAggregator;
use crate::timeframe::Timeframe;
use crate::transaction::{NormalizedTransaction, Transaction, TransactionNormalizer};

/// Generates dashboard reports from immutable input snapshots.
///
/// Every operation here is pure and synchronous; the caller re-invokes on
/// each new snapshot and discards stale results itself.
pub struct DashboardService;

impl DashboardService {
    /// Computes the full report for one snapshot and timeframe.
    ///
    /// The current and previous windows are evaluated in parallel; each
    /// window sums in input order, so results are reproducible.
    #[must_use]
    pub fn generate(
        snapshot: &[Transaction],
        rates: &RateTable,
        store: &dyn BudgetStore,
        timeframe: Timeframe,
        today: NaiveDate,
        config: &AppConfig,
    ) -> DashboardReport {
        let windows = timeframe.resolve(today);
        let display = config.analytics.display_currency;
        let converter = CurrencyConverter::new(rates);

        let normalized = TransactionNormalizer::normalize(snapshot, display, &converter);
        let in_window = |window: &crate::timeframe::ReportingWindow| -> Vec<NormalizedTransaction> {
            normalized
                .transactions
                .iter()
                .filter(|tx| window.contains(tx.date))
                .cloned()
                .collect()
        };
        let current = in_window(&windows.current);
        let previous = in_window(&windows.previous);

        let ((current_totals, category_tree, leaderboards), (previous_totals, baselines)) =
            rayon::join(
                || {
                    (
                        MetricsAggregator::window_totals(&current),
                        HierarchyBuilder::build(&current, config.analytics.other_cutoff_percent),
                        MetricsAggregator::leaderboards(&current),
                    )
                },
                || {
                    (
                        MetricsAggregator::window_totals(&previous),
                        SpendBaselines::from_history(&previous),
                    )
                },
            );

        let metrics = MetricsAggregator::summarize(&current_totals, &previous_totals);

        let budget = store.get();
        let pace = budget.and_then(|budget| {
            BudgetPacer::pace(
                &budget,
                &windows.current,
                today,
                metrics.net_expenses,
                display,
                &converter,
                config.pace.tolerance_ratio,
            )
            .map_err(|err| warn!(%err, "skipping budget pace"))
            .ok()
        });

        let anomalies = AnomalyDetector::detect(&current, &baselines, &config.anomaly);
        let insights = InsightGenerator::generate(&metrics, &leaderboards, pace.as_ref(), &anomalies);

        DashboardReport {
            timeframe,
            windows,
            generated_for: today,
            display_currency: display,
            metrics,
            leaderboards,
            category_tree,
            pace,
            anomalies,
            insights,
            skipped_transactions: normalized.skipped,
            fingerprint: Self::fingerprint(snapshot, timeframe, today, config, budget),
            cached: false,
        }
    }

    /// Content fingerprint of every input that shapes a report:
    /// transaction-set identity, display currency, timeframe, "now", the
    /// analytics knobs, and the budget snapshot.
    #[must_use]
    pub fn fingerprint(
        snapshot: &[Transaction],
        timeframe: Timeframe,
        today: NaiveDate,
        config: &AppConfig,
        budget: Option<BudgetConfig>,
    ) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("{timeframe:?}|{today}|"));
        hasher.update(config.analytics.display_currency.code());
        hasher.update(format!(
            "|{}|{}|{}|{}|{}|",
            config.analytics.other_cutoff_percent,
            config.anomaly.spike_ratio,
            config.anomaly.high_ratio,
            config.anomaly.absolute_floor,
            config.pace.tolerance_ratio,
        ));
        match budget {
            Some(budget) => hasher.update(format!(
                "{}|{}|{:?}|",
                budget.budget.amount, budget.budget.currency, budget.period
            )),
            None => hasher.update("no-budget|"),
        }
        for tx in snapshot {
            hasher.update(tx.id.into_inner().as_bytes());
            hasher.update(format!(
                "{:?}|{:?}|{}|{:?}|{:?}|{:?}|{}|{}|",
                tx.date,
                tx.amount,
                tx.currency,
                tx.payment_amount,
                tx.payment_currency,
                tx.reimbursement_amount,
                tx.category,
                tx.merchant,
            ));
        }
        hex::encode(hasher.finalize())
    }
}
