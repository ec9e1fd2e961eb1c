//! Multi-currency handling and exchange rates.

pub mod conversion;
pub mod exchange;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::convert_amount;
pub use exchange::{ExchangeRate, RateTable};
pub use service::CurrencyConverter;
