mod handlers;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::query::Query;
use crate::storage::Layout;
use crate::types::{is_valid_amount, RecordId, Timestamp, TimestampError, TimestampFormat};

pub use handlers::execute;

/// A terminal checkbook backed by a CSV ledger.
#[derive(Debug, Parser)]
#[command(name = "checkbook", version)]
pub struct Cli {
    /// Ledger file to read and write.
    #[arg(long, env = "CHECKBOOK_LEDGER", default_value = "ledger.csv")]
    pub ledger: PathBuf,

    /// Column set the ledger file uses.
    #[arg(long, value_enum, default_value_t = Layout::Standard)]
    pub layout: Layout,

    /// Form of timestamps given to new transactions.
    #[arg(long, value_enum, default_value_t = TimestampFormat::DateTime)]
    pub timestamp_format: TimestampFormat,

    /// One of error, warn, info, debug or trace.
    #[arg(long, default_value = "error")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current balance.
    Balance,
    /// Record a credit.
    Deposit(EntryArgs),
    /// Record a debit.
    Withdraw(EntryArgs),
    /// List transactions, optionally narrowed by one filter.
    History(FilterArgs),
    /// Rewrite an existing transaction; its deposit/withdrawal sign is kept.
    Modify(ModifyArgs),
    /// Max, min and average of credits and debits.
    Stats(FilterArgs)
}

#[derive(Debug, Args)]
pub struct EntryArgs {
    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub description: String,

    /// Dollar value such as 50 or 50.50.
    #[arg(long, value_parser = parse_amount)]
    pub amount: Decimal,

    /// YYYY-MM-DD, defaults to now.
    #[arg(long)]
    pub date: Option<String>,

    /// HH:MM:SS, only together with --date.
    #[arg(long, requires = "date")]
    pub time: Option<String>
}

impl EntryArgs {
    pub fn timestamp(&self) -> Result<Option<Timestamp>, TimestampError> {
        self.date.as_deref()
            .map(|date| Timestamp::from_parts(date, self.time.as_deref()))
            .transpose()
    }
}

#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct FilterArgs {
    /// Timestamp prefix, e.g. 2016-04-03.
    #[arg(long)]
    pub date: Option<String>,

    /// Exact category.
    #[arg(long)]
    pub category: Option<String>,

    /// Fragment of the description.
    #[arg(long)]
    pub description: Option<String>
}

impl FilterArgs {
    pub fn query(&self) -> Option<Query> {
        if let Some(date) = &self.date {
            return Some(Query::DatePrefix(date.clone()));
        }

        if let Some(category) = &self.category {
            return Some(Query::Category(category.clone()));
        }

        self.description.clone().map(Query::DescriptionContains)
    }
}

#[derive(Debug, Args)]
pub struct ModifyArgs {
    #[arg(long)]
    pub id: RecordId,

    /// YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS".
    #[arg(long, value_parser = parse_timestamp)]
    pub timestamp: Timestamp,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub description: String,

    /// Dollar value such as 50 or 50.50.
    #[arg(long, value_parser = parse_amount)]
    pub amount: Decimal
}

fn parse_amount(value: &str) -> Result<Decimal, String> {
    if !is_valid_amount(value) {
        return Err(format!("'{value}' is not a dollar value (e.g. 50 or 50.50)"));
    }

    value.parse::<Decimal>().map_err(|error| error.to_string())
}

fn parse_timestamp(value: &str) -> Result<Timestamp, String> {
    value.parse::<Timestamp>().map_err(|error| error.to_string())
}
