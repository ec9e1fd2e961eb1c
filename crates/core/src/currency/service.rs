//! Currency conversion service.
//!
//! The converter only does arithmetic; formatting for display is an external
//! collaborator's job.

use rust_decimal::Decimal;
use soldi_shared::types::Currency;
use tracing::warn;

use super::conversion::convert_amount;
use super::exchange::RateTable;

/// Converts amounts between currencies using a rate table snapshot.
///
/// An unknown currency pair never raises an error: the converter degrades to
/// a 1:1 identity conversion and logs a warning, on the grounds that an
/// approximate number beats a blocked render.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyConverter<'a> {
    rates: &'a RateTable,
}

impl<'a> CurrencyConverter<'a> {
    /// Creates a converter over the given rate table.
    #[must_use]
    pub const fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Converts an amount from one currency to another.
    ///
    /// Identity pairs are returned unchanged. Converted amounts are rounded
    /// to 4 decimal places with banker's rounding. When no rate path exists
    /// the amount is returned unchanged (degraded 1:1 mode, logged).
    #[must_use]
    pub fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Decimal {
        if from == to {
            return amount;
        }

        match self.rates.resolve(from, to) {
            Some(rate) => convert_amount(amount, rate),
            None => {
                warn!(%from, %to, "no exchange rate path, degrading to 1:1 conversion");
                amount
            }
        }
    }
}
