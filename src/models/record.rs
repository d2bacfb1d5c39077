use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{RecordError, TransactionKind};
use crate::types::{Amount, RecordId, Timestamp};

/// A single ledger entry, one row of the ledger file.
///
/// The sign of `amount` carries the kind of transaction: deposits are stored
/// as non-negative amounts and withdrawals as negative ones. Once a record is
/// created that sign never flips, `modify` re-signs new amounts to match it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Record {
    /// Sequential identifier, the first record in a ledger is 1.
    pub id: RecordId,
    /// When the transaction happened.
    pub timestamp: Timestamp,
    /// Free-form grouping such as "income" or "grocery".
    pub category: String,
    /// Free-form note such as "paycheck for March".
    pub description: String,
    /// Signed amount, positive for deposits and negative for withdrawals.
    pub amount: Amount
}

impl Record {
    /// Builds a deposit record storing `amount` as a credit.
    ///
    /// # Errors
    /// Returns `RecordError::InvalidAmount` if `amount` is negative.
    pub fn deposit(
        id: RecordId,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
        timestamp: Timestamp
    ) -> Result<Self, RecordError> {
        let amount = validate_magnitude(TransactionKind::Deposit, amount)?;

        Ok(Self::build(id, category, description, amount, timestamp))
    }

    /// Builds a withdrawal record storing `amount` as a debit.
    ///
    /// # Errors
    /// Returns `RecordError::InvalidAmount` if `amount` is negative.
    pub fn withdrawal(
        id: RecordId,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
        timestamp: Timestamp
    ) -> Result<Self, RecordError> {
        let amount = validate_magnitude(TransactionKind::Withdrawal, amount)?;

        Ok(Self::build(id, category, description, -amount, timestamp))
    }

    pub fn kind(&self) -> TransactionKind {
        if self.amount.is_negative() {
            TransactionKind::Withdrawal
        } else {
            TransactionKind::Deposit
        }
    }

    pub fn is_credit(&self) -> bool {
        self.kind() == TransactionKind::Deposit
    }

    fn build(
        id: RecordId,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Amount,
        timestamp: Timestamp
    ) -> Self {
        Self {
            id,
            timestamp,
            category: category.into(),
            description: description.into(),
            amount
        }
    }
}

fn validate_magnitude(kind: TransactionKind, amount: Decimal) -> Result<Amount, RecordError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(RecordError::invalid_amount(kind, amount));
    }

    Ok(Amount::from_decimal(amount))
}
