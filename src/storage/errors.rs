use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::RecordError;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Ledger file [{}] was not found", .path.display())]
    FileNotFound {
        path: PathBuf
    },
    #[error("Ledger file [{}] could not be accessed: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Ledger CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Ledger header [{found}] does not match the configured columns [{expected}]")]
    UnexpectedHeader {
        expected: String,
        found: String
    },
    #[error("Corrupt record on line [{line}]: {reason}")]
    CorruptRecord {
        line: u64,
        reason: String
    },
    #[error("Ledger has run out of record ids")]
    IdOverflow,
    #[error("Ledger balance exceeds the largest representable amount")]
    BalanceOverflow,
    #[error(transparent)]
    Record(#[from] RecordError)
}

impl LedgerError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path: path.to_path_buf() }
        } else {
            Self::Io { path: path.to_path_buf(), source }
        }
    }

    pub fn corrupt(line: u64, reason: impl Into<String>) -> Self {
        Self::CorruptRecord { line, reason: reason.into() }
    }
}
