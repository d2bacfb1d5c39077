use clap::ValueEnum;
use csv::StringRecord;

use crate::models::Record;
use crate::storage::LedgerError;
use crate::types::{Amount, RecordId, Timestamp};

pub const ID_COL: &str = "id";
pub const TIMESTAMP_COL: &str = "timestamp";
pub const CATEGORY_COL: &str = "category";
pub const DESCRIPTION_COL: &str = "description";
pub const AMOUNT_COL: &str = "amount";

/// The exact column set a ledger file is expected to carry.
///
/// Older ledgers were written without the `id` and/or `category` columns.
/// Ids in such files are the 1-based position of the data row and the
/// category reads back as an empty string.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Layout {
    /// id, timestamp, category, description, amount
    #[default]
    Standard,
    /// timestamp, category, description, amount
    NoId,
    /// id, timestamp, description, amount
    NoCategory,
    /// timestamp, description, amount
    Minimal
}

impl Layout {
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Layout::Standard => &[ID_COL, TIMESTAMP_COL, CATEGORY_COL, DESCRIPTION_COL, AMOUNT_COL],
            Layout::NoId => &[TIMESTAMP_COL, CATEGORY_COL, DESCRIPTION_COL, AMOUNT_COL],
            Layout::NoCategory => &[ID_COL, TIMESTAMP_COL, DESCRIPTION_COL, AMOUNT_COL],
            Layout::Minimal => &[TIMESTAMP_COL, DESCRIPTION_COL, AMOUNT_COL]
        }
    }

    pub fn check_header(&self, header: &StringRecord) -> Result<(), LedgerError> {
        let expected = self.columns();

        if header.iter().map(str::trim).eq(expected.iter().copied()) {
            return Ok(());
        }

        Err(LedgerError::UnexpectedHeader {
            expected: expected.join(","),
            found: header.iter().collect::<Vec<_>>().join(",")
        })
    }

    /// Serializes `record` into a row in this layout's column order.
    pub fn to_row(&self, record: &Record) -> Vec<String> {
        self.columns().iter().map(|column| match *column {
            ID_COL => record.id.to_string(),
            TIMESTAMP_COL => record.timestamp.to_string(),
            CATEGORY_COL => record.category.clone(),
            DESCRIPTION_COL => record.description.clone(),
            _ => record.amount.to_string()
        }).collect()
    }

    /// Parses a data row; `index` is the 0-based position of the row after the header.
    pub fn parse_row(&self, row: &StringRecord, index: usize) -> Result<Record, LedgerError> {
        let line = line_of(row, index);
        self.check_width(row, line)?;

        let timestamp = self.field(row, TIMESTAMP_COL, line)?.parse::<Timestamp>()
            .map_err(|error| LedgerError::corrupt(line, error.to_string()))?;

        let category = match self.index_of(CATEGORY_COL) {
            Some(_) => self.field(row, CATEGORY_COL, line)?.to_string(),
            None => String::new()
        };

        Ok(Record {
            id: self.row_id(row, index)?,
            timestamp,
            category,
            description: self.field(row, DESCRIPTION_COL, line)?.to_string(),
            amount: self.amount(row, index)?
        })
    }

    /// Reads the id of a data row without parsing the rest of it.
    pub fn row_id(&self, row: &StringRecord, index: usize) -> Result<RecordId, LedgerError> {
        let line = line_of(row, index);

        match self.index_of(ID_COL) {
            Some(_) => {
                let raw = self.field(row, ID_COL, line)?;
                raw.trim().parse::<RecordId>()
                    .map_err(|error| LedgerError::corrupt(line, format!("invalid id '{raw}': {error}")))
            }
            None => RecordId::try_from(index + 1)
                .map_err(|_| LedgerError::IdOverflow)
        }
    }

    /// Whether the raw row carries `id`, comparing the id column textually.
    /// Compares ids numerically, the same way `row_id` reads them, so `01` matches 1.
    pub fn matches_id(&self, row: &StringRecord, index: usize, id: RecordId) -> bool {
        self.row_id(row, index).is_ok_and(|row_id| row_id == id)
    }

    pub fn amount(&self, row: &StringRecord, index: usize) -> Result<Amount, LedgerError> {
        let line = line_of(row, index);
        let raw = self.field(row, AMOUNT_COL, line)?;

        raw.parse::<Amount>()
            .map_err(|error| LedgerError::corrupt(line, format!("invalid amount '{raw}': {error}")))
    }

    /// Returns a copy of `row` with everything but the id replaced.
    pub fn rewrite(
        &self,
        row: &StringRecord,
        index: usize,
        timestamp: &Timestamp,
        category: &str,
        description: &str,
        amount: Amount
    ) -> Result<StringRecord, LedgerError> {
        self.check_width(row, line_of(row, index))?;

        let fields: Vec<String> = self.columns().iter().zip(row.iter()).map(|(column, existing)| match *column {
            TIMESTAMP_COL => timestamp.to_string(),
            CATEGORY_COL => category.to_string(),
            DESCRIPTION_COL => description.to_string(),
            AMOUNT_COL => amount.to_string(),
            _ => existing.to_string()
        }).collect();

        Ok(StringRecord::from(fields))
    }

    fn check_width(&self, row: &StringRecord, line: u64) -> Result<(), LedgerError> {
        let expected = self.columns().len();

        if row.len() != expected {
            return Err(LedgerError::corrupt(line, format!("expected {expected} columns, found {}", row.len())));
        }

        Ok(())
    }

    fn index_of(&self, column: &str) -> Option<usize> {
        self.columns().iter().position(|candidate| *candidate == column)
    }

    fn field<'r>(&self, row: &'r StringRecord, column: &str, line: u64) -> Result<&'r str, LedgerError> {
        self.index_of(column)
            .and_then(|position| row.get(position))
            .ok_or_else(|| LedgerError::corrupt(line, format!("missing column '{column}'")))
    }
}

fn line_of(row: &StringRecord, index: usize) -> u64 {
    //NOTE: the header occupies line 1, rows built in memory have no position
    row.position()
        .map(|position| position.line())
        .unwrap_or(index as u64 + 2)
}
