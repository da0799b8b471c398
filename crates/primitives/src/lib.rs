//! Primitive types shared by all transaction crates.

pub use alloy_primitives::{
    address, b256, hex, keccak256, ruint::ParseError as RuintParseError, Address, Bytes, TxKind,
    B256, U256, U8,
};
