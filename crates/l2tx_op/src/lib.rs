//! OP Stack transaction types.
//!
//! Besides the transaction types of Ethereum L1, OP Stack chains support
//! deposit transactions: transactions that originate on L1 and whose sender is
//! known without signature recovery.

/// Sender recovery and signing.
pub mod signer;
/// Transaction types.
pub mod transaction;

pub use self::{
    signer::Signer,
    transaction::{Deposit, OpTransaction, OpTransactionType},
};
