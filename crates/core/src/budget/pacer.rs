//! Budget pacing and projection.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use soldi_shared::types::Currency;

use super::error::BudgetError;
use super::types::{BudgetConfig, BudgetPace, BudgetPeriod, PaceColor, PaceStatus};
use crate::currency::CurrencyConverter;
use crate::currency::conversion::round_bankers;
use crate::timeframe::ReportingWindow;

const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Scales budgets to reporting windows and classifies spending pace.
pub struct BudgetPacer;

impl BudgetPacer {
    /// Evaluates a budget against a window's net expenses.
    ///
    /// The budget amount is converted to the display currency, then scaled
    /// proportionally to the window's day count: a weekly budget viewed over
    /// a full month scales to roughly 4.3 weeks.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive budget amount or an empty window.
    pub fn pace(
        config: &BudgetConfig,
        window: &ReportingWindow,
        today: NaiveDate,
        net_expenses: Decimal,
        display: Currency,
        converter: &CurrencyConverter<'_>,
        tolerance_ratio: Decimal,
    ) -> Result<BudgetPace, BudgetError> {
        if !config.budget.is_positive() {
            return Err(BudgetError::NonPositiveAmount);
        }
        let days = window.days();
        if days <= 0 {
            return Err(BudgetError::EmptyWindow);
        }

        let amount = converter.convert(config.budget.amount, config.budget.currency, display);

        let scaled_budget = match config.period {
            BudgetPeriod::Weekly => amount * Decimal::from(days) / DAYS_PER_WEEK,
            BudgetPeriod::Monthly => {
                amount * Decimal::from(days) / Decimal::from(window.days_in_final_month())
            }
        };
        let scaled_budget = round_bankers(scaled_budget, 4);

        let expected_spend = window
            .elapsed_ratio(today)
            .map_or(Decimal::ZERO, |ratio| round_bankers(scaled_budget * ratio, 4));

        let variance_ratio = if expected_spend <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            round_bankers(net_expenses / expected_spend, 4)
        };

        let status = if net_expenses > scaled_budget {
            PaceStatus::OverBudget
        } else if variance_ratio > tolerance_ratio {
            PaceStatus::AheadOfPace
        } else {
            PaceStatus::OnTrack
        };

        let days_elapsed = window.days_elapsed(today);
        let projection = if days_elapsed == 0 {
            net_expenses
        } else {
            round_bankers(
                net_expenses * Decimal::from(days) / Decimal::from(days_elapsed),
                4,
            )
        };

        Ok(BudgetPace {
            scaled_budget,
            expected_spend,
            variance_ratio,
            status,
            projection,
        })
    }

    /// Maps a variance ratio onto a green-to-red color.
    ///
    /// Ratios in [0, 1] are green, (1, 1.5] fade from green to red, and
    /// anything beyond 1.5 is fully red.
    #[must_use]
    pub fn pace_color(variance_ratio: Decimal) -> PaceColor {
        if variance_ratio <= Decimal::ONE {
            return PaceColor::GREEN;
        }
        let t = (variance_ratio - Decimal::ONE) / Decimal::new(5, 1);
        PaceColor::lerp(PaceColor::GREEN, PaceColor::RED, t)
    }
}
