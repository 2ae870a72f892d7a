use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    #[error("Price must not be negative")]
    Negative,
}

/// A non-negative product price with two decimal places of storage precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn parse(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            Err(PriceError::Negative)
        } else {
            Ok(Self(amount))
        }
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::parse(amount)
    }
}
