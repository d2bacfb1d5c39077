mod amount;
mod errors;
mod timestamp;

pub use amount::{is_valid_amount, Amount};
pub use errors::TimestampError;
pub use timestamp::{Timestamp, TimestampFormat};

pub type RecordId = u32;
