//! Core analytics engine for Soldi.
//!
//! This crate contains pure computation with ZERO web or database dependencies.
//! It turns an immutable snapshot of multi-currency transactions into
//! normalized metrics, category breakdowns, budget pacing, and anomaly flags.
//!
//! # Modules
//!
//! - `currency` - Multi-currency handling and exchange rates
//! - `transaction` - Transaction records and display-currency normalization
//! - `timeframe` - Calendar-aligned reporting windows
//! - `category` - Category taxonomy and hierarchical spend breakdown
//! - `metrics` - Summary metrics and top-N leaderboards
//! - `budget` - Budget pacing, projections, and the budget store capability
//! - `anomaly` - Spending-anomaly detection
//! - `insight` - Ranked recommendations
//! - `dashboard` - Report orchestration and memoization

pub mod anomaly;
pub mod budget;
pub mod category;
pub mod currency;
pub mod dashboard;
pub mod insight;
pub mod metrics;
pub mod timeframe;
pub mod transaction;
