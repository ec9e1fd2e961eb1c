//! Property-based tests for currency operations.

use proptest::prelude::*;
use rust_decimal::Decimal;
use soldi_shared::types::Currency;

use super::conversion::convert_amount;
use super::exchange::{ExchangeRate, RateTable};
use super::service::CurrencyConverter;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion result always has at most 4 decimal places.
    #[test]
    fn prop_convert_rounds_to_4_decimals(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate);
        let scaled = result * Decimal::from(10000);
        prop_assert_eq!(
            scaled,
            scaled.round(),
            "Result {} should have at most 4 decimal places",
            result
        );
    }

    /// Conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        prop_assert_eq!(convert_amount(amount, rate), convert_amount(amount, rate));
    }

    /// The converter never loses or invents signs.
    #[test]
    fn prop_convert_preserves_sign(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate);
        prop_assert!(result >= Decimal::ZERO);
        let negated = convert_amount(-amount, rate);
        prop_assert!(negated <= Decimal::ZERO);
    }

    /// Degraded mode is the identity: with an empty table, any cross-currency
    /// conversion returns the amount unchanged.
    #[test]
    fn prop_degraded_mode_is_identity(amount in positive_amount()) {
        let table = RateTable::new(Currency::Usd);
        let converter = CurrencyConverter::new(&table);
        prop_assert_eq!(
            converter.convert(amount, Currency::Eur, Currency::Jpy),
            amount
        );
    }

    /// Round-tripping through an inverse rate stays within rounding tolerance.
    #[test]
    fn prop_inverse_roundtrip_within_tolerance(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let table = RateTable::from_rates(
            Currency::Usd,
            &[ExchangeRate::new(Currency::Usd, Currency::Eur, rate, date)],
        );
        let converter = CurrencyConverter::new(&table);

        let there = converter.convert(amount, Currency::Usd, Currency::Eur);
        let back = converter.convert(there, Currency::Eur, Currency::Usd);

        // Two bankers-roundings at 4 dp, scaled by the rate, bound the error.
        let tolerance = (Decimal::new(1, 4) / rate + Decimal::new(1, 4)) * Decimal::TWO;
        prop_assert!(
            (back - amount).abs() <= tolerance,
            "roundtrip {} -> {} -> {} exceeded tolerance {}",
            amount,
            there,
            back,
            tolerance
        );
    }
}
