/// The deposit transaction type
/// <https://specs.optimism.io/protocol/deposits.html#the-deposited-transaction-type>
mod deposit;
mod envelope;
mod r#type;

pub use l2tx_transaction::signed::{Eip1559, Eip2930, Legacy};

pub use self::{deposit::Deposit, r#type::ParseError};

/// An OP transaction, as included in blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpTransaction {
    /// Legacy transaction, with or without EIP-155 replay protection
    Legacy(Legacy),
    /// EIP-2930 transaction
    Eip2930(Eip2930),
    /// EIP-1559 transaction
    Eip1559(Eip1559),
    /// OP deposit transaction
    Deposit(Deposit),
}

/// The type of OP transaction.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpTransactionType {
    /// OP legacy transaction
    Legacy = Legacy::TYPE,
    /// OP EIP-2930 transaction
    Eip2930 = Eip2930::TYPE,
    /// OP EIP-1559 transaction
    Eip1559 = Eip1559::TYPE,
    /// OP deposit transaction
    Deposit = Deposit::TYPE,
}

impl From<Deposit> for OpTransaction {
    fn from(transaction: Deposit) -> Self {
        Self::Deposit(transaction)
    }
}

impl From<Eip1559> for OpTransaction {
    fn from(transaction: Eip1559) -> Self {
        Self::Eip1559(transaction)
    }
}

impl From<Eip2930> for OpTransaction {
    fn from(transaction: Eip2930) -> Self {
        Self::Eip2930(transaction)
    }
}

impl From<Legacy> for OpTransaction {
    fn from(transaction: Legacy) -> Self {
        Self::Legacy(transaction)
    }
}
