use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::models::Record;
use crate::storage::{LedgerConfig, LedgerError, Storage};
use crate::types::{Amount, RecordId, Timestamp};

/// A ledger kept as a delimited text file, one row per record.
///
/// Every operation opens the file, does its work and closes it again, nothing
/// is cached between calls. The store assumes it is the only writer.
pub struct CsvLedger {
    config: LedgerConfig
}

impl CsvLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Records a deposit under the next free id and returns it as stored.
    ///
    /// Without a `timestamp` the current time is used, in the ledger's
    /// configured [`TimestampFormat`](crate::types::TimestampFormat).
    pub fn deposit(&self, category: &str, description: &str, amount: Decimal, timestamp: Option<Timestamp>) -> Result<Record, LedgerError> {
        let timestamp = timestamp.unwrap_or_else(|| Timestamp::now(self.config.timestamp_format));
        let record = Record::deposit(self.next_id()?, category, description, amount, timestamp)?;

        self.append(&record)?;

        Ok(record)
    }

    /// Records a withdrawal under the next free id and returns it as stored.
    pub fn withdraw(&self, category: &str, description: &str, amount: Decimal, timestamp: Option<Timestamp>) -> Result<Record, LedgerError> {
        let timestamp = timestamp.unwrap_or_else(|| Timestamp::now(self.config.timestamp_format));
        let record = Record::withdrawal(self.next_id()?, category, description, amount, timestamp)?;

        self.append(&record)?;

        Ok(record)
    }

    fn read_rows(&self) -> Result<Vec<StringRecord>, LedgerError> {
        let file = File::open(self.path()).map_err(|error| LedgerError::io(self.path(), error))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        self.config.layout.check_header(reader.headers()?)?;

        let mut rows = Vec::new();
        for result in reader.records() {
            rows.push(result?);
        }

        Ok(rows)
    }

    /// Writes the header and `rows` to a temporary file next to the ledger,
    /// then renames it over the ledger in a single step.
    fn replace_rows(&self, rows: &[StringRecord]) -> Result<(), LedgerError> {
        let directory = match self.path().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new(".")
        };

        let temporary = NamedTempFile::new_in(directory).map_err(|error| LedgerError::io(directory, error))?;

        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_writer(temporary.as_file());

            writer.write_record(self.config.layout.columns())?;

            for row in rows {
                writer.write_record(row)?;
            }

            writer.flush().map_err(|error| LedgerError::io(temporary.path(), error))?;
        }

        temporary.as_file().sync_all().map_err(|error| LedgerError::io(temporary.path(), error))?;
        temporary.persist(self.path()).map_err(|error| LedgerError::io(self.path(), error.error))?;

        Ok(())
    }
}

impl Storage for CsvLedger {
    fn ensure_created(&self) -> Result<bool, LedgerError> {
        let file = match OpenOptions::new().write(true).create_new(true).open(self.path()) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(error) => return Err(LedgerError::io(self.path(), error))
        };

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(self.config.layout.columns())?;
        writer.flush().map_err(|error| LedgerError::io(self.path(), error))?;

        info!("Created ledger at [{}]", self.path().display());

        Ok(true)
    }

    fn append(&self, record: &Record) -> Result<(), LedgerError> {
        let file = OpenOptions::new()
            .append(true)
            .open(self.path())
            .map_err(|error| LedgerError::io(self.path(), error))?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(self.config.layout.to_row(record))?;
        writer.flush().map_err(|error| LedgerError::io(self.path(), error))?;

        debug!("Record [{}]:[{:?}] appended with amount [{}]", record.id, record.kind(), record.amount);

        Ok(())
    }

    fn next_id(&self) -> Result<RecordId, LedgerError> {
        let rows = self.read_rows()?;

        let Some(last) = rows.last() else {
            return Ok(1)
        };

        self.config.layout.row_id(last, rows.len() - 1)?
            .checked_add(1)
            .ok_or(LedgerError::IdOverflow)
    }

    fn read_all(&self) -> Result<Vec<Record>, LedgerError> {
        let rows = self.read_rows()?;
        let layout = self.config.layout;

        let records = rows.iter().enumerate()
            .map(|(index, row)| layout.parse_row(row, index))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Read [{}] records from [{}]", records.len(), self.path().display());

        Ok(records)
    }

    fn modify(
        &self,
        id: RecordId,
        timestamp: Timestamp,
        category: &str,
        description: &str,
        amount: Decimal
    ) -> Result<bool, LedgerError> {
        let layout = self.config.layout;
        let mut rows = self.read_rows()?;
        let mut matched = false;

        for (index, row) in rows.iter_mut().enumerate() {
            if !layout.matches_id(row, index, id) {
                continue;
            }

            let original = layout.amount(row, index)?;
            let amount = Amount::from_decimal(amount).with_sign_of(original);

            *row = layout.rewrite(row, index, &timestamp, category, description, amount)?;
            matched = true;
        }

        //NOTE: an unknown id still rewrites the ledger unchanged, callers are expected to check `contains_id` first
        if !matched {
            warn!("No record with id [{id}] in [{}], ledger rewritten unchanged", self.path().display());
        }

        self.replace_rows(&rows)?;

        if matched {
            info!("Record [{id}] modified in [{}]", self.path().display());
        }

        Ok(matched)
    }
}
