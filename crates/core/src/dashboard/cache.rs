//! Dashboard report caching using Moka.
//!
//! Reports are memoized by a content fingerprint of their inputs, decoupled
//! from any UI lifecycle: recomputation happens only when an input actually
//! changed.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::sync::Cache;
use soldi_shared::config::{AppConfig, CacheConfig};

use super::service::DashboardService;
use super::types::DashboardReport;
use crate::budget::BudgetStore;
use crate::currency::RateTable;
use crate::timeframe::Timeframe;
use crate::transaction::Transaction;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for dashboard reports.
///
/// Uses the input fingerprint as the cache key and stores complete reports.
/// Thread-safe and suitable for concurrent access.
#[derive(Clone)]
pub struct DashboardCache {
    cache: Cache<String, Arc<DashboardReport>>,
}

impl DashboardCache {
    /// Creates a new cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new cache with custom capacity and TTL.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Creates a cache from the application cache configuration.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_config(config.max_capacity, config.ttl_secs)
    }

    /// Generates a report, returning a cached one when the inputs are
    /// unchanged.
    ///
    /// A cache hit comes back with `cached: true`. A miss runs the full
    /// computation and stores the result before returning it.
    #[must_use]
    pub fn generate_cached(
        &self,
        snapshot: &[Transaction],
        rates: &RateTable,
        store: &dyn BudgetStore,
        timeframe: Timeframe,
        today: NaiveDate,
        config: &AppConfig,
    ) -> DashboardReport {
        let key = DashboardService::fingerprint(snapshot, timeframe, today, config, store.get());

        if let Some(cached) = self.cache.get(&key) {
            let mut report = (*cached).clone();
            report.cached = true;
            return report;
        }

        let report = DashboardService::generate(snapshot, rates, store, timeframe, today, config);
        self.cache.insert(key, Arc::new(report.clone()));
        report
    }

    /// Invalidates all cached reports.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles this in the background, but calling it explicitly helps
    /// reclaim memory sooner and makes entry counts deterministic in tests.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for DashboardCache {
    fn default() -> Self {
        Self::new()
    }
}
