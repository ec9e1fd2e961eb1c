//! Budget store capability.
//!
//! The storage mechanism itself is an external collaborator; the engine only
//! needs get/set with last-write-wins semantics.

use std::sync::RwLock;

use super::types::BudgetConfig;

/// Capability for reading and writing the persisted budget configuration.
pub trait BudgetStore: Send + Sync {
    /// Returns the current budget, if one is configured.
    fn get(&self) -> Option<BudgetConfig>;

    /// Replaces the budget. Last write wins.
    fn set(&self, config: BudgetConfig);
}

/// In-memory store for tests and sample data.
#[derive(Debug, Default)]
pub struct InMemoryBudgetStore {
    inner: RwLock<Option<BudgetConfig>>,
}

impl InMemoryBudgetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a budget.
    #[must_use]
    pub fn with_budget(config: BudgetConfig) -> Self {
        Self {
            inner: RwLock::new(Some(config)),
        }
    }
}

impl BudgetStore for InMemoryBudgetStore {
    fn get(&self) -> Option<BudgetConfig> {
        *self.inner.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn set(&self, config: BudgetConfig) {
        *self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(config);
    }
}
