//! Ethereum transaction types

/// Types for signed transactions.
pub mod signed;
/// Utility functions
pub mod utils;

use l2tx_eip2930::AccessListItem;
pub use l2tx_primitives::{Address, Bytes, TxKind, B256, U256};
use l2tx_signer::SignatureError;
pub use l2tx_signer::SignatureWithRecoveryId;

pub const INVALID_TX_TYPE_ERROR_MESSAGE: &str = "invalid tx type";

/// The operations that every kind of transaction supports, regardless of
/// whether it is signed by a user or originated elsewhere.
///
/// The RLP encoding provided by the [`alloy_rlp::Encodable`] and
/// [`alloy_rlp::Decodable`] supertraits is the transaction's payload, without
/// the type prefix of typed transactions.
pub trait TransactionData: alloy_rlp::Encodable + alloy_rlp::Decodable {
    /// Returns the transaction's type identifier.
    fn tx_type(&self) -> u8;

    /// Returns the chain ID that the transaction is bound to, or zero if it is
    /// not bound to a chain.
    fn chain_id(&self) -> u64;

    /// Returns the transaction's access list.
    fn access_list(&self) -> &[AccessListItem];

    /// Returns the transaction's calldata.
    fn data(&self) -> &Bytes;

    /// Returns the transaction's gas limit.
    fn gas(&self) -> u64;

    /// Returns the maximum fee per gas that the sender is willing to pay.
    fn gas_fee_cap(&self) -> U256;

    /// Returns the maximum priority fee per gas that the sender is willing to
    /// pay.
    fn gas_tip_cap(&self) -> U256;

    /// Returns the gas price.
    fn gas_price(&self) -> U256;

    /// Returns the value that is transferred to the recipient.
    fn value(&self) -> U256;

    /// Returns the transaction's nonce.
    fn nonce(&self) -> u64;

    /// Returns the recipient, or `None` for a contract creation.
    fn to(&self) -> Option<&Address>;

    /// Whether the transaction is exempt from ordinary gas accounting.
    fn is_system_tx(&self) -> bool;

    /// Writes the price per gas that the transaction pays, given the block's
    /// base fee, into `dst`.
    fn effective_gas_price(&self, dst: &mut U256, base_fee: Option<U256>);

    /// Returns the nonce that the transaction consumes, if any.
    fn effective_nonce(&self) -> Option<u64>;

    /// Computes the hash that the sender signs for the provided chain ID.
    fn signature_hash(&self, chain_id: u64) -> Result<B256, TransactionError>;

    /// Returns the raw `(v, r, s)` signature values.
    fn raw_signature_values(&self) -> SignatureWithRecoveryId;

    /// Sets the signature values.
    fn set_signature_values(&mut self, chain_id: u64, signature: SignatureWithRecoveryId);

    /// Creates a copy that shares no memory with `self`.
    fn deep_copy(&self) -> Self;
}

/// An error that occurs when operating on a transaction.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The operation is not supported by the transaction type.
    #[error("{operation} is not supported by transactions of type {transaction_type:#04x}")]
    UnsupportedOperation {
        /// Name of the operation
        operation: &'static str,
        /// Type of the transaction
        transaction_type: u8,
    },
    /// A deposit transaction was expected.
    #[error("Expected a deposit transaction, but got a transaction of type {0:#04x}")]
    NotDeposit(u8),
    /// The transaction type is unknown.
    #[error("Unknown transaction type: {0:#04x}")]
    UnknownType(u8),
    /// Bytes remained after decoding a transaction.
    #[error("{0} trailing bytes after transaction")]
    TrailingBytes(usize),
    /// The transaction is bound to a different chain.
    #[error("Invalid chain ID. Expected {expected}, got {actual}")]
    ChainIdMismatch {
        /// The signer's chain ID
        expected: u64,
        /// The transaction's chain ID
        actual: u64,
    },
    /// RLP decoding error
    #[error(transparent)]
    Decode(#[from] alloy_rlp::Error),
    /// Signature error
    #[error(transparent)]
    Signature(#[from] SignatureError),
}
