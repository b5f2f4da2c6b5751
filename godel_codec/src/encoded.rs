//! Arbitrary-precision natural numbers produced by the codec.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::DomainError;

/// A natural number standing for one [`TMConfig`](crate::TMConfig).
///
/// Holds no reference back to the configuration that produced it. Zero is
/// representable so callers can hand it to the decoder, which rejects it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedValue(BigUint);

impl EncodedValue {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Number of significant bits; a cheap size measure for reporting.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }
}

impl From<BigUint> for EncodedValue {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for EncodedValue {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u32> for EncodedValue {
    fn from(value: u32) -> Self {
        Self(BigUint::from(value))
    }
}

impl TryFrom<BigInt> for EncodedValue {
    type Error = DomainError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        value
            .to_biguint()
            .map(Self)
            .ok_or(DomainError::NonPositiveValue)
    }
}

impl TryFrom<i64> for EncodedValue {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from(BigInt::from(value))
    }
}

impl FromStr for EncodedValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: BigInt = s
            .trim()
            .parse()
            .map_err(|_| DomainError::Unparseable(s.to_string()))?;
        Self::try_from(parsed)
    }
}

impl fmt::Display for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
