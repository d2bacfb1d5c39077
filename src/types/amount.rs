use crate::types::errors::AmountError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Neg;
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// A signed ledger amount held at exactly two decimal places.
///
/// Positive (and zero) values are credits, negative values are debits.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Rounds `value` to two decimal places (midpoint away from zero).
    pub fn from_decimal(value: Decimal) -> Self {
        let mut value = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(DECIMAL_PLACES);

        //NOTE: rust_decimal keeps a sign bit on zero, a zero amount is never written as "-0.00"
        if value.is_zero() {
            value.set_sign_positive(true);
        }

        Amount(value)
    }

    pub fn decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn abs(self) -> Amount {
        Amount::from_decimal(self.0.abs())
    }

    /// Returns the magnitude of `self` carrying the sign of `reference`.
    pub fn with_sign_of(self, reference: Amount) -> Amount {
        if reference.is_negative() {
            -self.abs()
        } else {
            self.abs()
        }
    }

    /// Adds two amounts, `None` once the total leaves the representable range.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount::from_decimal)
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Self::Output {
        Amount::from_decimal(-self.0)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.prec$}", self.0, prec = DECIMAL_PLACES as usize)
    }
}

/// Parses an amount as stored in the ledger file, sign included.
///
/// Stored amounts are read leniently (any decimal literal) and normalised to
/// two decimal places; user input is checked with [`is_valid_amount`] first.
impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str(value)?;

        Ok(Amount::from_decimal(decimal))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Accepts `digits` or `digits.dd` (exactly two fractional digits).
///
/// Signs, extra decimal points and anything non-numeric are rejected.
pub fn is_valid_amount(value: &str) -> bool {
    let is_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    let parts: Vec<&str> = value.split('.').collect();

    match parts.as_slice() {
        [integer] => is_digits(integer),
        [integer, fraction] => is_digits(integer) && fraction.len() == DECIMAL_PLACES as usize && is_digits(fraction),
        _ => false
    }
}
