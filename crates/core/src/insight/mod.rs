//! Ranked recommendations derived from the other engine outputs.

pub mod generator;

pub use generator::{Insight, InsightAction, InsightGenerator, InsightSeverity};
