//! Application configuration management.
//!
//! Every knob has a serde default, so the engine runs with no external
//! configuration at all. Values can be overridden through `config/*.toml`
//! files or `SOLDI__`-prefixed environment variables.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analytics configuration.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Anomaly detection configuration.
    #[serde(default)]
    pub anomaly: AnomalyConfig,
    /// Budget pacing configuration.
    #[serde(default)]
    pub pace: PaceConfig,
    /// Report cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Analytics configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Currency all amounts are normalized into before aggregation.
    #[serde(default = "default_display_currency")]
    pub display_currency: Currency,
    /// Share of the immediate total (in percent) below which a hierarchy
    /// node is merged into the synthetic "Other" bucket.
    #[serde(default = "default_other_cutoff")]
    pub other_cutoff_percent: Decimal,
}

fn default_display_currency() -> Currency {
    Currency::Usd
}

fn default_other_cutoff() -> Decimal {
    Decimal::from(5)
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            display_currency: default_display_currency(),
            other_cutoff_percent: default_other_cutoff(),
        }
    }
}

/// Anomaly detection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnomalyConfig {
    /// Minimum ratio of amount to baseline for a transaction to qualify.
    #[serde(default = "default_spike_ratio")]
    pub spike_ratio: Decimal,
    /// Ratio above which an anomaly is classified as high severity.
    #[serde(default = "default_high_ratio")]
    pub high_ratio: Decimal,
    /// Absolute display-currency floor. No transaction below this amount is
    /// ever flagged, regardless of its ratio to baseline.
    #[serde(default = "default_absolute_floor")]
    pub absolute_floor: Decimal,
}

fn default_spike_ratio() -> Decimal {
    Decimal::from(3)
}

fn default_high_ratio() -> Decimal {
    Decimal::from(5)
}

fn default_absolute_floor() -> Decimal {
    Decimal::from(75)
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            spike_ratio: default_spike_ratio(),
            high_ratio: default_high_ratio(),
            absolute_floor: default_absolute_floor(),
        }
    }
}

/// Budget pacing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PaceConfig {
    /// Variance ratio above which spending is classified as ahead of pace.
    /// 1.1 allows a 10% tolerance band above exact pace.
    #[serde(default = "default_tolerance_ratio")]
    pub tolerance_ratio: Decimal,
}

fn default_tolerance_ratio() -> Decimal {
    Decimal::new(11, 1)
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            tolerance_ratio: default_tolerance_ratio(),
        }
    }
}

/// Report cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached reports.
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
    /// Time-to-live for cached reports, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    100
}

fn default_cache_ttl() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SOLDI").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
