use super::{Record, RecordError, TransactionKind};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::types::Timestamp;

fn timestamp(date: &str, time: &str) -> Result<Timestamp> {
    Ok(Timestamp::from_parts(date, Some(time))?)
}

fn day(date: &str) -> Result<Timestamp> {
    Ok(Timestamp::from_parts(date, None)?)
}

#[test]
fn test_deposit_keeps_amount_positive() -> Result<()> {
    let deposit = Record::deposit(1, "income", "paycheck for March", Decimal::from_str("1.00")?, timestamp("2016-04-03", "12:43:12")?)?;

    assert_eq!(deposit.id, 1);
    assert_eq!(deposit.timestamp.to_string(), "2016-04-03 12:43:12");
    assert_eq!(deposit.category, "income");
    assert_eq!(deposit.description, "paycheck for March");
    assert_eq!(deposit.amount.to_string(), "1.00");
    assert_eq!(deposit.kind(), TransactionKind::Deposit);

    let deposit = Record::deposit(2, "reimbursement", "mileage", Decimal::from_str("20.14")?, timestamp("2016-12-30", "12:43:12")?)?;

    assert_eq!(deposit.timestamp.to_string(), "2016-12-30 12:43:12");
    assert_eq!(deposit.amount.to_string(), "20.14");

    Ok(())
}

#[test]
fn test_withdrawal_negates_amount() -> Result<()> {
    let withdrawal = Record::withdrawal(1, "grocery", "gum", Decimal::from_str("1.00")?, timestamp("2016-04-03", "12:43:12")?)?;

    assert_eq!(withdrawal.category, "grocery");
    assert_eq!(withdrawal.description, "gum");
    assert_eq!(withdrawal.amount.to_string(), "-1.00");
    assert_eq!(withdrawal.kind(), TransactionKind::Withdrawal);
    assert!(!withdrawal.is_credit());

    let withdrawal = Record::withdrawal(2, "child care", "babysitter for one hour", Decimal::from_str("20.14")?, day("2016-04-03")?)?;

    assert_eq!(withdrawal.amount.to_string(), "-20.14");

    Ok(())
}

#[test]
fn test_negative_magnitudes_are_rejected() -> Result<()> {
    let deposit = Record::deposit(1, "income", "refund", Decimal::from_str("-1.00")?, day("2016-04-03")?);
    let withdrawal = Record::withdrawal(1, "grocery", "gum", Decimal::from_str("-1.00")?, day("2016-04-03")?);

    assert!(matches!(deposit, Err(RecordError::InvalidAmount { kind: TransactionKind::Deposit, .. })));
    assert!(matches!(withdrawal, Err(RecordError::InvalidAmount { kind: TransactionKind::Withdrawal, .. })));

    Ok(())
}

#[test]
fn test_amounts_are_rounded_to_two_decimal_places() -> Result<()> {
    let deposit = Record::deposit(1, "income", "interest", Decimal::from_str("3.14159")?, day("2016-04-03")?)?;

    assert_eq!(deposit.amount.to_string(), "3.14");

    Ok(())
}

#[test]
fn test_zero_withdrawal_is_stored_unsigned() -> Result<()> {
    let withdrawal = Record::withdrawal(1, "fees", "waived fee", Decimal::ZERO, day("2016-04-03")?)?;

    assert_eq!(withdrawal.amount.to_string(), "0.00");
    assert!(withdrawal.is_credit());

    Ok(())
}

#[test]
fn test_timestamp_is_stored_as_given() -> Result<()> {
    let dated = Record::deposit(1, "income", "cash", Decimal::from(5), day("2016-04-03")?)?;

    assert_eq!(dated.timestamp, Timestamp::from_str("2016-04-03")?);
    assert_eq!(dated.timestamp.to_string(), "2016-04-03");

    Ok(())
}
