//! Transaction data types.
//!
//! Transactions are owned and created by an external persistence
//! collaborator; the engine reads them as-is. Fields that the store cannot
//! guarantee are optional here, and validation happens during normalization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use soldi_shared::types::{Currency, InstrumentId, TransactionId};

/// A payment instrument reference (e.g. a specific card or account).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstrument {
    /// Instrument ID.
    pub id: InstrumentId,
    /// Display label (e.g. "Amber Card •• 4421").
    pub label: String,
}

/// A raw transaction record as supplied by the persistence collaborator.
///
/// Invariant: a gross amount > 0 marks a spend; ≤ 0 marks a refund or
/// adjustment that is excluded from spend totals but retained for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Transaction date. Missing dates mark the record as malformed.
    pub date: Option<NaiveDate>,
    /// Gross amount in the book currency. Missing amounts mark the record
    /// as malformed.
    pub amount: Option<Decimal>,
    /// Book currency of the gross amount.
    pub currency: Currency,
    /// Amount as settled on the card statement, if different.
    pub payment_amount: Option<Decimal>,
    /// Currency of the card-statement amount.
    pub payment_currency: Option<Currency>,
    /// Reimbursed portion of the amount, in the settlement basis currency.
    pub reimbursement_amount: Option<Decimal>,
    /// Free-form leaf category name (e.g. "groceries").
    pub category: String,
    /// Merchant name.
    pub merchant: String,
    /// Payment instrument used, if recorded.
    pub instrument: Option<PaymentInstrument>,
    /// Reward points earned on the transaction.
    pub reward_points: Option<Decimal>,
}

impl Transaction {
    /// Settlement basis: the card-statement amount when present, else the
    /// gross amount.
    #[must_use]
    pub fn basis_amount(&self) -> Option<Decimal> {
        self.payment_amount.or(self.amount)
    }

    /// Currency of the settlement basis.
    #[must_use]
    pub fn basis_currency(&self) -> Currency {
        self.payment_currency.unwrap_or(self.currency)
    }

    /// True when the record carries everything aggregation needs.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.date.is_some() && self.amount.is_some() && !self.category.trim().is_empty()
    }
}
