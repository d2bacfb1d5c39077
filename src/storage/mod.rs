mod csv_ledger;
mod errors;
mod layout;

use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::models::Record;
use crate::types::{Amount, RecordId, Timestamp, TimestampFormat};

pub use csv_ledger::CsvLedger;
pub use errors::LedgerError;
pub use layout::Layout;

/// Where a ledger lives and how its file is laid out.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub path: PathBuf,
    pub layout: Layout,
    pub timestamp_format: TimestampFormat
}

impl LedgerConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            layout: Layout::default(),
            timestamp_format: TimestampFormat::default()
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_timestamp_format(mut self, timestamp_format: TimestampFormat) -> Self {
        self.timestamp_format = timestamp_format;
        self
    }
}

pub trait Storage {
    /// Creates the ledger with its header row unless it already exists.
    /// Returns whether a new ledger was created.
    fn ensure_created(&self) -> Result<bool, LedgerError>;

    /// Adds `record` after every row currently in the ledger.
    fn append(&self, record: &Record) -> Result<(), LedgerError>;

    /// The id the next appended record must carry.
    fn next_id(&self) -> Result<RecordId, LedgerError>;

    /// Every record in file order.
    fn read_all(&self) -> Result<Vec<Record>, LedgerError>;

    /// Rewrites the record with `id`, keeping the sign of its stored amount.
    /// Returns `false` when no record matched, the ledger is then left as it was.
    fn modify(
        &self,
        id: RecordId,
        timestamp: Timestamp,
        category: &str,
        description: &str,
        amount: Decimal
    ) -> Result<bool, LedgerError>;

    /// Sum of every stored amount; fails rather than wrap or saturate.
    fn balance(&self) -> Result<Amount, LedgerError> {
        self.read_all()?
            .iter()
            .try_fold(Amount::ZERO, |total, record| total.checked_add(record.amount))
            .ok_or(LedgerError::BalanceOverflow)
    }

    fn contains_id(&self, id: RecordId) -> Result<bool, LedgerError> {
        Ok(self.read_all()?.iter().any(|record| record.id == id))
    }
}
