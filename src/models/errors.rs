use crate::models::TransactionKind;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Invalid amount [{amount}] for {kind:?}: the amount must not be negative")]
    InvalidAmount {
        kind: TransactionKind,
        amount: Decimal
    }
}

impl RecordError {
    pub fn invalid_amount(kind: TransactionKind, amount: Decimal) -> Self {
        Self::InvalidAmount { kind, amount }
    }
}
