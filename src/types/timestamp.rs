use crate::types::errors::TimestampError;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use clap::ValueEnum;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FRACTIONAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const MAX_FRACTION_DIGITS: usize = 9;

/// Which form newly created timestamps take in the ledger file.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum TimestampFormat {
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DD HH:MM:SS`
    #[default]
    DateTime
}

/// When a transaction happened, either a bare date or a date and time.
///
/// The textual form is what date-prefix queries match against, so a bare
/// date such as `2016-04-03` matches every timestamp within that day.
/// Older ledgers carry fractional seconds (`12:43:12.100000`); those keep
/// the width they were read with so they print back exactly as stored.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Timestamp {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Fractional {
        value: NaiveDateTime,
        digits: usize
    }
}

impl Timestamp {
    /// The current local time, truncated to whole seconds.
    pub fn now(format: TimestampFormat) -> Self {
        let now = Local::now().naive_local();
        let now = now.with_nanosecond(0).unwrap_or(now);

        match format {
            TimestampFormat::Date => Timestamp::Date(now.date()),
            TimestampFormat::DateTime => Timestamp::DateTime(now)
        }
    }

    /// Builds a timestamp from a `YYYY-MM-DD` date and an optional `HH:MM:SS` time.
    pub fn from_parts(date: &str, time: Option<&str>) -> Result<Self, TimestampError> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)?;

        match time {
            Some(time) => {
                let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT)?;
                Ok(Timestamp::DateTime(date.and_time(time)))
            }
            None => Ok(Timestamp::Date(date))
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Date(date) => write!(formatter, "{}", date.format(DATE_FORMAT)),
            Timestamp::DateTime(date_time) => write!(formatter, "{}", date_time.format(DATE_TIME_FORMAT)),
            Timestamp::Fractional { value, digits } => {
                let nanoseconds = format!("{:09}", value.nanosecond() % 1_000_000_000);
                write!(formatter, "{}.{}", value.format(DATE_TIME_FORMAT), &nanoseconds[..*digits])
            }
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let invalid = || TimestampError::InvalidFormat { value: value.to_string() };

        if !value.contains(' ') {
            return NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(Timestamp::Date)
                .map_err(|_| invalid());
        }

        match value.rsplit_once('.') {
            Some((_, fraction)) => {
                let digits = fraction.len();

                if digits == 0 || digits > MAX_FRACTION_DIGITS || !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }

                NaiveDateTime::parse_from_str(value, FRACTIONAL_FORMAT)
                    .map(|value| Timestamp::Fractional { value, digits })
                    .map_err(|_| invalid())
            }
            None => NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
                .map(Timestamp::DateTime)
                .map_err(|_| invalid())
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
