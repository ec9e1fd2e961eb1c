//! Property-based tests for budget pacing.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use soldi_shared::types::{Currency, Money};

use super::pacer::BudgetPacer;
use super::types::{BudgetConfig, BudgetPeriod, PaceColor, PaceStatus};
use crate::currency::{CurrencyConverter, RateTable};
use crate::timeframe::Timeframe;

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_00).prop_map(|cents| Decimal::new(cents, 2))
}

fn day_strategy() -> impl Strategy<Value = u32> {
    1u32..=28
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Over-budget always wins the classification, whatever the ratio says.
    #[test]
    fn prop_over_budget_takes_priority(
        budget in amount_strategy(),
        day in day_strategy(),
        extra in amount_strategy(),
    ) {
        let table = RateTable::new(Currency::Usd);
        let converter = CurrencyConverter::new(&table);
        let today = NaiveDate::from_ymd_opt(2026, 6, day).unwrap();
        let window = Timeframe::ThisMonth.resolve(today).current;

        let config = BudgetConfig {
            budget: Money::new(budget, Currency::Usd),
            period: BudgetPeriod::Monthly,
        };
        let pace = BudgetPacer::pace(
            &config,
            &window,
            today,
            budget + extra,
            Currency::Usd,
            &converter,
            Decimal::new(11, 1),
        )
        .unwrap();
        prop_assert_eq!(pace.status, PaceStatus::OverBudget);
    }

    /// Variance ratio is never produced from a zero denominator.
    #[test]
    fn prop_variance_guarded(
        budget in amount_strategy(),
        net in amount_strategy(),
    ) {
        let table = RateTable::new(Currency::Usd);
        let converter = CurrencyConverter::new(&table);
        // Multi-month window: elapsed ratio undefined, expected spend 0.
        let today = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let window = Timeframe::LastSixMonths.resolve(today).current;

        let config = BudgetConfig {
            budget: Money::new(budget, Currency::Usd),
            period: BudgetPeriod::Monthly,
        };
        let pace = BudgetPacer::pace(
            &config,
            &window,
            today,
            net,
            Currency::Usd,
            &converter,
            Decimal::new(11, 1),
        )
        .unwrap();
        prop_assert_eq!(pace.expected_spend, Decimal::ZERO);
        prop_assert_eq!(pace.variance_ratio, Decimal::ZERO);
    }

    /// A fully elapsed single-month window projects net expenses onto
    /// themselves.
    #[test]
    fn prop_projection_of_closed_month_is_net(
        net in amount_strategy(),
    ) {
        let table = RateTable::new(Currency::Usd);
        let converter = CurrencyConverter::new(&table);
        let today = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        let window = Timeframe::LastMonth.resolve(today).current;

        let config = BudgetConfig {
            budget: Money::new(Decimal::ONE_HUNDRED, Currency::Usd),
            period: BudgetPeriod::Monthly,
        };
        let pace = BudgetPacer::pace(
            &config,
            &window,
            today,
            net,
            Currency::Usd,
            &converter,
            Decimal::new(11, 1),
        )
        .unwrap();
        prop_assert_eq!(pace.projection, net);
    }

    /// The pace color is green up to exact pace and red past 1.5, with every
    /// in-between ratio producing an in-between hue.
    #[test]
    fn prop_pace_color_bands(ratio_bps in 0i64..30_000) {
        let ratio = Decimal::new(ratio_bps, 4);
        let color = BudgetPacer::pace_color(ratio);
        if ratio <= Decimal::ONE {
            prop_assert_eq!(color, PaceColor::GREEN);
        } else if ratio > Decimal::new(15, 1) {
            prop_assert_eq!(color, PaceColor::RED);
        } else {
            // Gradient band: channels stay between the two endpoints.
            prop_assert!(color.r >= PaceColor::GREEN.r && color.r <= PaceColor::RED.r);
            prop_assert!(color.g <= PaceColor::GREEN.g && color.g >= PaceColor::RED.g);
        }
    }
}
