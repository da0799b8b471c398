use std::str::FromStr;

use l2tx_primitives::{RuintParseError, U8};

use super::{Deposit, Eip1559, Eip2930, Legacy, OpTransactionType};

/// An error that occurs when parsing an [`OpTransactionType`] from a string.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Quantity(#[from] RuintParseError),
    #[error("Invalid radix. Only hexadecimal is supported.")]
    InvalidRadix,
    #[error("Unknown transaction type: {0}")]
    UnknownType(u8),
}

impl From<OpTransactionType> for u8 {
    fn from(t: OpTransactionType) -> u8 {
        t as u8
    }
}

impl FromStr for OpTransactionType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("0x").ok_or(ParseError::InvalidRadix)?;
        let value = U8::from_str_radix(rest, 16)?;

        OpTransactionType::try_from(value.to::<u8>()).map_err(ParseError::UnknownType)
    }
}

impl TryFrom<u8> for OpTransactionType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            Legacy::TYPE => Ok(Self::Legacy),
            Eip2930::TYPE => Ok(Self::Eip2930),
            Eip1559::TYPE => Ok(Self::Eip1559),
            Deposit::TYPE => Ok(Self::Deposit),
            value => Err(value),
        }
    }
}

impl<'deserializer> serde::Deserialize<'deserializer> for OpTransactionType {
    fn deserialize<D>(deserializer: D) -> Result<OpTransactionType, D::Error>
    where
        D: serde::Deserializer<'deserializer>,
    {
        let value = U8::deserialize(deserializer)?;
        OpTransactionType::try_from(value.to::<u8>()).map_err(|value| {
            serde::de::Error::custom(format!("Unknown transaction type: {value}"))
        })
    }
}

impl serde::Serialize for OpTransactionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        U8::serialize(&U8::from(u8::from(*self)), serializer)
    }
}
