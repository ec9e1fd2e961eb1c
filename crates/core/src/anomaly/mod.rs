//! Spending-anomaly detection.

pub mod detector;

#[cfg(test)]
mod props;

pub use detector::{Anomaly, AnomalyDetector, AnomalySeverity, SpendBaselines};
