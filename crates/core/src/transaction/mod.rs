//! Transaction records and display-currency normalization.

pub mod normalize;
pub mod types;

pub use normalize::{NormalizedSnapshot, NormalizedTransaction, TransactionNormalizer};
pub use types::{PaymentInstrument, Transaction};
