//! Exchange rate table and pair resolution.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use soldi_shared::types::Currency;

/// Exchange rate between two currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency.
    pub from_currency: Currency,
    /// Target currency.
    pub to_currency: Currency,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
    /// Date this rate is effective.
    pub effective_date: NaiveDate,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(
        from_currency: Currency,
        to_currency: Currency,
        rate: Decimal,
        effective_date: NaiveDate,
    ) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
            effective_date,
        }
    }

    /// Returns the inverse rate.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            from_currency: self.to_currency,
            to_currency: self.from_currency,
            rate: Decimal::ONE / self.rate,
            effective_date: self.effective_date,
        }
    }
}

/// A snapshot of exchange rates against a base currency.
///
/// Rate resolution for a from→to pair, in order: direct rate, inverse of the
/// reverse rate, triangulation through the base currency. Rates with a zero
/// value are ignored (they cannot be inverted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    base: Currency,
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Creates an empty rate table with the given base currency.
    #[must_use]
    pub fn new(base: Currency) -> Self {
        Self {
            base,
            rates: HashMap::new(),
        }
    }

    /// Returns the base currency used for triangulation.
    #[must_use]
    pub const fn base(&self) -> Currency {
        self.base
    }

    /// Inserts a rate, replacing any previous rate for the same pair.
    pub fn insert(&mut self, rate: ExchangeRate) {
        if rate.rate.is_zero() {
            return;
        }
        self.rates
            .insert(Self::pair_key(rate.from_currency, rate.to_currency), rate.rate);
    }

    /// Builds a table from a list of rates, last write wins per pair.
    #[must_use]
    pub fn from_rates(base: Currency, rates: &[ExchangeRate]) -> Self {
        let mut table = Self::new(base);
        for rate in rates {
            table.insert(*rate);
        }
        table
    }

    /// Looks up the direct rate for a pair, or the inverse of the reverse pair.
    #[must_use]
    pub fn pair_rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        if let Some(rate) = self.rates.get(&Self::pair_key(from, to)) {
            return Some(*rate);
        }
        self.rates
            .get(&Self::pair_key(to, from))
            .map(|reverse| Decimal::ONE / reverse)
    }

    /// Resolves the rate for a from→to pair.
    ///
    /// Returns `Some(1)` for an identity pair. Falls back to triangulation
    /// through the base currency when no direct or inverse rate exists.
    /// Returns `None` when no path exists at all.
    #[must_use]
    pub fn resolve(&self, from: Currency, to: Currency) -> Option<Decimal> {
        if from == to {
            return Some(Decimal::ONE);
        }
        if let Some(rate) = self.pair_rate(from, to) {
            return Some(rate);
        }

        // Triangulate: from -> base -> to.
        let to_base = self.pair_rate(from, self.base)?;
        let from_base = self.pair_rate(self.base, to)?;
        Some(to_base * from_base)
    }

    fn pair_key(from: Currency, to: Currency) -> String {
        format!("{from}->{to}")
    }
}
