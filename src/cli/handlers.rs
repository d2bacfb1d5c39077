use std::io::Write;

use anyhow::{bail, Result};
use csv::WriterBuilder;
use tracing::debug;

use crate::cli::{Command, EntryArgs, FilterArgs, ModifyArgs};
use crate::models::{Record, TransactionKind};
use crate::stats::{Partition, Stats};
use crate::storage::{CsvLedger, Layout, Storage};

/// Runs one command against `ledger`, writing what it reports to `output`.
pub fn execute<W: Write>(command: &Command, ledger: &CsvLedger, output: &mut W) -> Result<()> {
    debug!("Executing {command:?} against [{}]", ledger.path().display());

    match command {
        Command::Balance => {
            writeln!(output, "Current balance: {}", ledger.balance()?)?;
        }
        Command::Deposit(entry) => record_entry(TransactionKind::Deposit, entry, ledger, output)?,
        Command::Withdraw(entry) => record_entry(TransactionKind::Withdrawal, entry, ledger, output)?,
        Command::History(filters) => write_history(filters, ledger, output)?,
        Command::Modify(modify) => modify_entry(modify, ledger, output)?,
        Command::Stats(filters) => write_stats(filters, ledger, output)?
    }

    Ok(())
}

fn record_entry<W: Write>(kind: TransactionKind, entry: &EntryArgs, ledger: &CsvLedger, output: &mut W) -> Result<()> {
    let timestamp = entry.timestamp()?;

    let record = match kind {
        TransactionKind::Deposit => ledger.deposit(&entry.category, &entry.description, entry.amount, timestamp)?,
        TransactionKind::Withdrawal => ledger.withdraw(&entry.category, &entry.description, entry.amount, timestamp)?
    };

    let label = match kind {
        TransactionKind::Deposit => "deposit",
        TransactionKind::Withdrawal => "withdrawal"
    };

    writeln!(output, "Recorded {label} #{} ({})", record.id, record.amount)?;

    Ok(())
}

fn modify_entry<W: Write>(modify: &ModifyArgs, ledger: &CsvLedger, output: &mut W) -> Result<()> {
    if !ledger.contains_id(modify.id)? {
        bail!("No transaction with id [{}] in [{}]", modify.id, ledger.path().display());
    }

    ledger.modify(modify.id, modify.timestamp, &modify.category, &modify.description, modify.amount)?;

    writeln!(output, "Modified transaction #{}", modify.id)?;

    Ok(())
}

fn select<'a>(filters: &FilterArgs, records: &'a [Record]) -> Vec<&'a Record> {
    match filters.query() {
        Some(query) => query.apply(records),
        None => records.iter().collect()
    }
}

fn write_history<W: Write>(filters: &FilterArgs, ledger: &CsvLedger, output: &mut W) -> Result<()> {
    let records = ledger.read_all()?;
    let selected = select(filters, &records);

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(Layout::Standard.columns())?;

    for record in selected {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}

fn write_stats<W: Write>(filters: &FilterArgs, ledger: &CsvLedger, output: &mut W) -> Result<()> {
    let records = ledger.read_all()?;
    let stats = Stats::from_records(select(filters, &records))?;

    for partition in [Partition::Credits, Partition::Debits] {
        match stats.get(partition) {
            Ok(summary) => writeln!(
                output,
                "{partition}: max={} min={} average={} total={} count={}",
                summary.max,
                summary.min,
                summary.average,
                summary.total,
                summary.count
            )?,
            Err(_) => writeln!(output, "{partition}: no data")?
        }
    }

    Ok(())
}
