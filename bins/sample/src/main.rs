//! Sample-data report generator for Soldi development and demos.
//!
//! Builds a small multi-currency snapshot, runs the analytics engine over
//! it, and prints the resulting dashboard report as JSON.
//!
//! Usage: cargo run --bin sample

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soldi_core::budget::{BudgetConfig, BudgetPeriod, InMemoryBudgetStore};
use soldi_core::dashboard::DashboardCache;
use soldi_core::timeframe::Timeframe;
use soldi_core::transaction::{PaymentInstrument, Transaction};
use soldi_core::currency::{ExchangeRate, RateTable};
use soldi_shared::AppConfig;
use soldi_shared::types::{Currency, InstrumentId, Money, TransactionId};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soldi=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let today = date(2026, 8, 15);
    let rates = sample_rates();
    let snapshot = sample_snapshot();
    let store = InMemoryBudgetStore::with_budget(BudgetConfig {
        budget: Money::new(Decimal::from(1200), Currency::Usd),
        period: BudgetPeriod::Monthly,
    });

    let cache = DashboardCache::from_config(&config.cache);
    let report = cache.generate_cached(
        &snapshot,
        &rates,
        &store,
        Timeframe::ThisMonth,
        today,
        &config,
    );
    info!(
        fingerprint = %report.fingerprint,
        anomalies = report.anomalies.len(),
        insights = report.insights.len(),
        "report generated"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn sample_rates() -> RateTable {
    let effective = date(2026, 8, 1);
    RateTable::from_rates(
        Currency::Usd,
        &[
            ExchangeRate::new(Currency::Eur, Currency::Usd, dec(1_08, 2), effective),
            ExchangeRate::new(Currency::Usd, Currency::Idr, dec(16_250, 0), effective),
            ExchangeRate::new(Currency::Usd, Currency::Jpy, dec(148, 0), effective),
        ],
    )
}

/// Shorthand for building decimals without float literals.
fn dec(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

fn tx(
    day: u32,
    amount: Decimal,
    currency: Currency,
    category: &str,
    merchant: &str,
    card: &InstrumentId,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        date: Some(date(2026, 8, day)),
        amount: Some(amount),
        currency,
        payment_amount: None,
        payment_currency: None,
        reimbursement_amount: None,
        category: category.to_string(),
        merchant: merchant.to_string(),
        instrument: Some(PaymentInstrument {
            id: *card,
            label: "Amber Card".to_string(),
        }),
        reward_points: None,
    }
}

fn sample_snapshot() -> Vec<Transaction> {
    let card = InstrumentId::new();
    let mut snapshot = vec![
        tx(1, dec(85_40, 2), Currency::Usd, "groceries", "Corner Market", &card),
        tx(2, dec(12_50, 2), Currency::Usd, "coffee shops", "Bean Scene", &card),
        tx(3, dec(64_00, 2), Currency::Eur, "restaurants", "Trattoria Nonna", &card),
        tx(5, dec(420_00, 2), Currency::Usd, "electronics", "Gadget Hub", &card),
        tx(7, dec(38_90, 2), Currency::Usd, "fuel", "Gas & Go", &card),
        tx(9, dec(15_99, 2), Currency::Usd, "streaming", "Streamflix", &card),
        tx(12, dec(95_00, 2), Currency::Usd, "groceries", "Greenmart", &card),
    ];
    // A refund and a July history month for the comparison window.
    snapshot.push(tx(13, dec(-20_00, 2), Currency::Usd, "electronics", "Gadget Hub", &card));
    for day in [2u32, 9, 16, 23] {
        let mut history = tx(day, dec(72_30, 2), Currency::Usd, "groceries", "Corner Market", &card);
        history.date = Some(date(2026, 7, day));
        snapshot.push(history);
    }
    snapshot
}
