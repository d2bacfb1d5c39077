use super::{Aggregate, Partition, Stats, StatsError};
use crate::models::Record;
use crate::types::Timestamp;
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

fn credit(id: u32, amount: &str) -> Result<Record> {
    Ok(Record::deposit(id, "income", "pay", Decimal::from_str(amount)?, Timestamp::from_parts("2016-04-03", None)?)?)
}

fn debit(id: u32, amount: &str) -> Result<Record> {
    Ok(Record::withdrawal(id, "grocery", "food", Decimal::from_str(amount)?, Timestamp::from_parts("2016-04-03", None)?)?)
}

#[test]
fn test_stats_are_computed_per_partition() -> Result<()> {
    let records = vec![
        credit(1, "10.00")?,
        debit(2, "5.00")?,
        credit(3, "20.00")?,
        debit(4, "15.00")?,
    ];

    let stats = Stats::from_records(&records)?;
    let credits = stats.credits()?;
    let debits = stats.debits()?;

    assert_eq!(credits.max.to_string(), "20.00");
    assert_eq!(credits.min.to_string(), "10.00");
    assert_eq!(credits.average.to_string(), "15.00");
    assert_eq!(credits.count, 2);

    assert_eq!(debits.max.to_string(), "15.00");
    assert_eq!(debits.min.to_string(), "5.00");
    assert_eq!(debits.average.to_string(), "10.00");
    assert_eq!(debits.total.to_string(), "20.00");

    Ok(())
}

#[test]
fn test_empty_partition_has_no_data() -> Result<()> {
    let records = vec![credit(1, "10.00")?];
    let stats = Stats::from_records(&records)?;

    assert_eq!(stats.debits, Aggregate::NoData);
    assert!(matches!(stats.debits(), Err(StatsError::EmptyAggregate { partition: Partition::Debits })));
    assert!(stats.get(Partition::Credits).is_ok());

    let no_records: Vec<Record> = Vec::new();
    let stats = Stats::from_records(&no_records)?;

    assert_eq!(stats.credits, Aggregate::NoData);
    assert!(matches!(stats.credits(), Err(StatsError::EmptyAggregate { partition: Partition::Credits })));

    Ok(())
}

#[test]
fn test_average_is_rounded_to_cents() -> Result<()> {
    let records = vec![credit(1, "1.00")?, credit(2, "1.00")?, credit(3, "2.00")?];
    let stats = Stats::from_records(&records)?;

    assert_eq!(stats.credits()?.average.to_string(), "1.33");

    Ok(())
}

#[test]
fn test_zero_amounts_count_as_credits() -> Result<()> {
    let records = vec![debit(1, "0.00")?, debit(2, "3.00")?];
    let stats = Stats::from_records(&records)?;

    assert_eq!(stats.credits()?.max.to_string(), "0.00");
    assert_eq!(stats.debits()?.count, 1);

    Ok(())
}

#[test]
fn test_stats_accept_filtered_records() -> Result<()> {
    let records = vec![credit(1, "10.00")?, credit(2, "30.00")?, debit(3, "7.00")?];
    let stats = Stats::from_records(records.iter().filter(|record| record.id > 1))?;

    assert_eq!(stats.credits()?.average.to_string(), "30.00");
    assert_eq!(stats.debits()?.max.to_string(), "7.00");

    Ok(())
}

#[test]
fn test_partition_total_overflow_is_an_error() -> Result<()> {
    let records = vec![
        credit(1, "79228162514264337593543950335")?,
        credit(2, "79228162514264337593543950335")?,
        debit(3, "1.00")?,
    ];

    assert!(matches!(Stats::from_records(&records), Err(StatsError::Overflow { partition: Partition::Credits })));
    assert!(Stats::from_records(&records[2..])?.debits().is_ok());

    Ok(())
}
