mod errors;
#[cfg(test)]
mod tests;

use std::fmt;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::models::Record;
use crate::types::Amount;

pub use errors::StatsError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Partition {
    Credits,
    Debits
}

impl Display for Partition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Credits => write!(formatter, "credits"),
            Partition::Debits => write!(formatter, "debits")
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub max: Amount,
    pub min: Amount,
    /// Arithmetic mean rounded to two decimal places.
    pub average: Amount,
    pub total: Amount
}

/// Result of aggregating one partition; an empty partition has no data
/// rather than an undefined extremum or a division by zero.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Aggregate {
    NoData,
    Summary(Summary)
}

impl Aggregate {
    pub fn from_amounts(partition: Partition, amounts: &[Amount]) -> Result<Self, StatsError> {
        let (Some(max), Some(min)) = (amounts.iter().max(), amounts.iter().min()) else {
            return Ok(Aggregate::NoData)
        };

        let count = amounts.len();
        let total = amounts.iter()
            .try_fold(Amount::ZERO, |total, amount| total.checked_add(*amount))
            .ok_or(StatsError::Overflow { partition })?;
        let average = Amount::from_decimal(total.decimal() / Decimal::from(count));

        Ok(Aggregate::Summary(Summary {
            count,
            max: *max,
            min: *min,
            average,
            total
        }))
    }
}

/// Max, min and average computed separately over credits and debits.
///
/// Credits are records with an amount of zero or more; debits are the
/// negative ones and are reported by their absolute value.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Stats {
    pub credits: Aggregate,
    pub debits: Aggregate
}

impl Stats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Result<Self, StatsError> {
        let (credits, debits): (Vec<&Record>, Vec<&Record>) = records.into_iter()
            .partition(|record| record.is_credit());

        let credits: Vec<Amount> = credits.iter().map(|record| record.amount).collect();
        let debits: Vec<Amount> = debits.iter().map(|record| record.amount.abs()).collect();

        Ok(Self {
            credits: Aggregate::from_amounts(Partition::Credits, &credits)?,
            debits: Aggregate::from_amounts(Partition::Debits, &debits)?
        })
    }

    pub fn credits(&self) -> Result<&Summary, StatsError> {
        Self::summary(&self.credits, Partition::Credits)
    }

    pub fn debits(&self) -> Result<&Summary, StatsError> {
        Self::summary(&self.debits, Partition::Debits)
    }

    pub fn get(&self, partition: Partition) -> Result<&Summary, StatsError> {
        match partition {
            Partition::Credits => self.credits(),
            Partition::Debits => self.debits()
        }
    }

    fn summary(aggregate: &Aggregate, partition: Partition) -> Result<&Summary, StatsError> {
        match aggregate {
            Aggregate::Summary(summary) => Ok(summary),
            Aggregate::NoData => Err(StatsError::EmptyAggregate { partition })
        }
    }
}
