use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: {0}")]
    Decimal(#[from] rust_decimal::Error)
}

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("Timestamp error: '{value}' is not a date (YYYY-MM-DD) or date and time (YYYY-MM-DD HH:MM:SS)")]
    InvalidFormat {
        value: String
    },
    #[error("Timestamp error: {0}")]
    Parse(#[from] chrono::ParseError)
}
