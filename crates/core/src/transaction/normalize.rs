//! Display-currency normalization of raw transaction records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use soldi_shared::types::{Currency, TransactionId};
use tracing::debug;

use super::types::{PaymentInstrument, Transaction};
use crate::currency::CurrencyConverter;

/// A validated transaction with all amounts in the display currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTransaction {
    /// Source transaction ID.
    pub id: TransactionId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Converted settlement-basis amount.
    pub gross: Decimal,
    /// Converted reimbursed portion.
    pub reimbursed: Decimal,
    /// Net amount: gross minus reimbursement.
    pub net: Decimal,
    /// Original leaf category name.
    pub leaf_category: String,
    /// Merchant name.
    pub merchant: String,
    /// Payment instrument, if recorded.
    pub instrument: Option<PaymentInstrument>,
    /// True when the original gross amount was > 0 (a spend). Refunds and
    /// adjustments stay in the snapshot but are excluded from spend sums.
    pub is_spend: bool,
}

/// Result of normalizing a snapshot: the surviving transactions plus a
/// diagnostic tally of malformed records that were excluded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedSnapshot {
    /// Validated transactions, in input order.
    pub transactions: Vec<NormalizedTransaction>,
    /// Number of records excluded for missing date/amount/category.
    pub skipped: usize,
}

/// Normalizes raw records into the display currency.
pub struct TransactionNormalizer;

impl TransactionNormalizer {
    /// Normalizes a snapshot of raw records.
    ///
    /// Malformed records (missing date, missing amount, or blank category)
    /// are excluded from the output and counted in `skipped` rather than
    /// failing the whole snapshot.
    #[must_use]
    pub fn normalize(
        records: &[Transaction],
        display: Currency,
        converter: &CurrencyConverter<'_>,
    ) -> NormalizedSnapshot {
        let mut snapshot = NormalizedSnapshot::default();

        for record in records {
            let (Some(date), Some(gross_book)) = (record.date, record.amount) else {
                debug!(id = %record.id, "skipping malformed transaction");
                snapshot.skipped += 1;
                continue;
            };
            if record.category.trim().is_empty() {
                debug!(id = %record.id, "skipping transaction without category");
                snapshot.skipped += 1;
                continue;
            }

            snapshot
                .transactions
                .push(Self::normalized(record, date, gross_book, display, converter));
        }

        snapshot
    }

    /// Net display-currency amount of a single well-formed record:
    /// converted settlement basis minus converted reimbursement.
    #[must_use]
    pub fn net_amount(
        record: &Transaction,
        display: Currency,
        converter: &CurrencyConverter<'_>,
    ) -> Option<Decimal> {
        let basis = record.basis_amount()?;
        let basis_currency = record.basis_currency();
        let gross = converter.convert(basis, basis_currency, display);
        let reimbursed = converter.convert(
            record.reimbursement_amount.unwrap_or(Decimal::ZERO),
            basis_currency,
            display,
        );
        Some(gross - reimbursed)
    }

    fn normalized(
        record: &Transaction,
        date: NaiveDate,
        gross_book: Decimal,
        display: Currency,
        converter: &CurrencyConverter<'_>,
    ) -> NormalizedTransaction {
        let basis = record.payment_amount.unwrap_or(gross_book);
        let basis_currency = record.basis_currency();

        let gross = converter.convert(basis, basis_currency, display);
        let reimbursed = converter.convert(
            record.reimbursement_amount.unwrap_or(Decimal::ZERO),
            basis_currency,
            display,
        );

        NormalizedTransaction {
            id: record.id,
            date,
            gross,
            reimbursed,
            net: gross - reimbursed,
            leaf_category: record.category.trim().to_string(),
            merchant: record.merchant.trim().to_string(),
            instrument: record.instrument.clone(),
            is_spend: gross_book > Decimal::ZERO,
        }
    }
}
