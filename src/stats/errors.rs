use crate::stats::Partition;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("No {partition} to aggregate")]
    EmptyAggregate {
        partition: Partition
    },
    #[error("Total of {partition} exceeds the largest representable amount")]
    Overflow {
        partition: Partition
    }
}
