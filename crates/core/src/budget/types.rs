//! Budget data types.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use soldi_shared::types::Money;

/// Budget period classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPeriod {
    /// Budget covers one week.
    Weekly,
    /// Budget covers one calendar month.
    Monthly,
}

/// A budget as configured in the external settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Budgeted amount per period, with its currency.
    pub budget: Money,
    /// Period the amount covers.
    pub period: BudgetPeriod,
}

/// Pace classification, evaluated in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceStatus {
    /// Net expenses already exceed the scaled budget outright.
    OverBudget,
    /// Spending faster than linear pace, beyond the tolerance band.
    AheadOfPace,
    /// Within the tolerance band.
    OnTrack,
}

/// Budget pace evaluation for one reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPace {
    /// Budget scaled to the window's day count, in the display currency.
    pub scaled_budget: Decimal,
    /// Expected spend to date under linear pacing (0 when the elapsed
    /// ratio is undefined for the window).
    pub expected_spend: Decimal,
    /// Net expenses divided by expected spend (0 when expected ≤ 0).
    pub variance_ratio: Decimal,
    /// Status classification.
    pub status: PaceStatus,
    /// Linear projection of net expenses to the full window.
    pub projection: Decimal,
}

/// RGB color for pace visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl PaceColor {
    /// Fully on-pace green.
    pub const GREEN: Self = Self {
        r: 46,
        g: 204,
        b: 113,
    };
    /// Fully over-pace red.
    pub const RED: Self = Self {
        r: 231,
        g: 76,
        b: 60,
    };

    /// Linear interpolation between two colors; `t` is clamped to [0, 1].
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: Decimal) -> Self {
        let t = t.clamp(Decimal::ZERO, Decimal::ONE);
        let channel = |a: u8, b: u8| -> u8 {
            let blended = Decimal::from(a) + (Decimal::from(b) - Decimal::from(a)) * t;
            blended.round().to_u8().unwrap_or(u8::MAX)
        };
        Self {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
        }
    }

    /// Hex string form, e.g. `#2ecc71`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
