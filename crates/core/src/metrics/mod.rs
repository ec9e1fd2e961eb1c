//! Summary metrics and top-N leaderboards.

pub mod aggregate;
pub mod types;

pub use aggregate::{MetricsAggregator, RollupEntry};
pub use types::{
    Leaderboards, PercentageChange, SpendingMetrics, TopCategory, TopInstrument, TopMerchant,
    WindowTotals,
};
