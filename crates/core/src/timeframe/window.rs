//! Timeframe selectors and reporting-window resolution.

use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reporting timeframe selector.
///
/// Multi-month timeframes cover full calendar months ending at the month
/// containing "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    /// The calendar month containing "now".
    ThisMonth,
    /// The full calendar month before the current one.
    LastMonth,
    /// Two full calendar months ending at the current month.
    LastTwoMonths,
    /// Three full calendar months ending at the current month.
    LastThreeMonths,
    /// Six full calendar months ending at the current month.
    LastSixMonths,
    /// The calendar year containing "now".
    ThisYear,
}

/// A closed calendar window: both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingWindow {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

/// The current window plus its comparable previous window: identical
/// calendar span, contiguous, non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPair {
    /// The selected reporting window.
    pub current: ReportingWindow,
    /// The window of identical span immediately before it.
    pub previous: ReportingWindow,
}

/// First day of the month containing `date`.
fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date) + Months::new(1) - Days::new(1)
}

/// Window covering `months` full calendar months, ending with the month that
/// starts at `final_month`.
fn month_span(final_month: NaiveDate, months: u32) -> ReportingWindow {
    ReportingWindow {
        start: final_month - Months::new(months - 1),
        end: final_month + Months::new(1) - Days::new(1),
    }
}

impl Timeframe {
    /// Number of calendar months the timeframe spans, or `None` for
    /// year-granularity timeframes.
    #[must_use]
    pub const fn months(self) -> Option<u32> {
        match self {
            Self::ThisMonth | Self::LastMonth => Some(1),
            Self::LastTwoMonths => Some(2),
            Self::LastThreeMonths => Some(3),
            Self::LastSixMonths => Some(6),
            Self::ThisYear => None,
        }
    }

    /// Resolves the timeframe against "now" into the current window and its
    /// comparable previous window.
    ///
    /// Resolution is deterministic: the same `today` always produces the
    /// same pair, and the previous window is contiguous with and never
    /// overlaps the current one.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> WindowPair {
        let anchor = month_start(today);

        match self {
            Self::ThisMonth => Self::month_pair(anchor, 1),
            Self::LastMonth => Self::month_pair(anchor - Months::new(1), 1),
            Self::LastTwoMonths => Self::month_pair(anchor, 2),
            Self::LastThreeMonths => Self::month_pair(anchor, 3),
            Self::LastSixMonths => Self::month_pair(anchor, 6),
            Self::ThisYear => {
                let year_start = anchor - Months::new(today.month0());
                WindowPair {
                    current: ReportingWindow {
                        start: year_start,
                        end: year_start + Months::new(12) - Days::new(1),
                    },
                    previous: ReportingWindow {
                        start: year_start - Months::new(12),
                        end: year_start - Days::new(1),
                    },
                }
            }
        }
    }

    fn month_pair(final_month: NaiveDate, months: u32) -> WindowPair {
        WindowPair {
            current: month_span(final_month, months),
            previous: month_span(final_month - Months::new(months), months),
        }
    }
}

impl ReportingWindow {
    /// Number of days in the window, both bounds inclusive.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// True if `date` falls within the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// True when the window is exactly one calendar month.
    #[must_use]
    pub fn is_single_month(&self) -> bool {
        self.start == month_start(self.start) && self.end == month_end(self.start)
    }

    /// Days of the window already elapsed as of `today`, clamped to
    /// `0..=days()`. A fully past window has all days elapsed.
    #[must_use]
    pub fn days_elapsed(&self, today: NaiveDate) -> i64 {
        ((today - self.start).num_days() + 1).clamp(0, self.days())
    }

    /// Elapsed ratio = days elapsed / days in window.
    ///
    /// Defined for single-calendar-month windows only; multi-month and year
    /// windows return `None`.
    #[must_use]
    pub fn elapsed_ratio(&self, today: NaiveDate) -> Option<Decimal> {
        if !self.is_single_month() {
            return None;
        }
        Some(Decimal::from(self.days_elapsed(today)) / Decimal::from(self.days()))
    }

    /// Day count of the calendar month containing the window's end.
    #[must_use]
    pub fn days_in_final_month(&self) -> i64 {
        let start = month_start(self.end);
        (month_end(self.end) - start).num_days() + 1
    }
}
