mod errors;
mod record;
#[cfg(test)]
mod tests;

pub use errors::RecordError;
pub use record::Record;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal
}
