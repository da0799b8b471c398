use alloy_rlp::{BufMut, Decodable, Encodable, EMPTY_LIST_CODE};
use l2tx_eip2930::AccessListItem;
use l2tx_primitives::{keccak256, Address, Bytes, B256, U256};
use l2tx_transaction::{
    utils::enveloped, SignatureWithRecoveryId, TransactionData, TransactionError,
    INVALID_TX_TYPE_ERROR_MESSAGE,
};

use super::{Deposit, Eip1559, Eip2930, Legacy, OpTransaction, OpTransactionType};

impl OpTransaction {
    /// Returns the type of the transaction.
    pub fn transaction_type(&self) -> OpTransactionType {
        match self {
            OpTransaction::Legacy(_) => OpTransactionType::Legacy,
            OpTransaction::Eip2930(_) => OpTransactionType::Eip2930,
            OpTransaction::Eip1559(_) => OpTransactionType::Eip1559,
            OpTransaction::Deposit(_) => OpTransactionType::Deposit,
        }
    }

    /// Whether the transaction is a deposit transaction.
    pub fn is_deposit(&self) -> bool {
        matches!(self, OpTransaction::Deposit(_))
    }

    /// Returns the sender of a deposit transaction.
    ///
    /// Deposits carry their sender, so unlike [`crate::Signer::sender`] this
    /// requires no knowledge of the chain. Calling this for any other type of
    /// transaction is a usage error.
    pub fn deposit_sender(&self) -> Result<&Address, TransactionError> {
        match self {
            OpTransaction::Deposit(tx) => Ok(&tx.from),
            OpTransaction::Legacy(_) | OpTransaction::Eip2930(_) | OpTransaction::Eip1559(_) => {
                Err(TransactionError::NotDeposit(self.tx_type()))
            }
        }
    }

    /// Returns the EIP-2718 binary encoding of the transaction: the type
    /// identifier followed by the RLP-encoded payload for typed transactions,
    /// or only the RLP-encoded payload for legacy transactions.
    pub fn encode_binary(&self) -> Bytes {
        alloy_rlp::encode(self).into()
    }

    /// Decodes a transaction from its EIP-2718 binary encoding, requiring all
    /// bytes to be consumed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn decode_binary(bytes: &[u8]) -> Result<Self, TransactionError> {
        let first = *bytes.first().ok_or(alloy_rlp::Error::InputTooShort)?;
        if first < EMPTY_LIST_CODE && !is_typed_transaction(first) {
            log::debug!("Rejecting transaction with unknown type: {first:#04x}");

            return Err(TransactionError::UnknownType(first));
        }

        let mut remainder = bytes;
        let transaction = Self::decode(&mut remainder)?;

        if !remainder.is_empty() {
            log::debug!(
                "Rejecting transaction with {} trailing bytes",
                remainder.len()
            );

            return Err(TransactionError::TrailingBytes(remainder.len()));
        }

        Ok(transaction)
    }

    /// Returns the transaction's hash.
    pub fn transaction_hash(&self) -> B256 {
        keccak256(self.encode_binary())
    }
}

/// Whether the provided byte identifies a typed transaction.
fn is_typed_transaction(first: u8) -> bool {
    OpTransactionType::try_from(first)
        .is_ok_and(|transaction_type| transaction_type != OpTransactionType::Legacy)
}

impl Decodable for OpTransaction {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let (&first, remainder) = buf.split_first().ok_or(alloy_rlp::Error::InputTooShort)?;

        // Legacy transactions are RLP lists without a type identifier.
        if first >= EMPTY_LIST_CODE {
            return Legacy::decode(buf).map(OpTransaction::Legacy);
        }

        let transaction_type = OpTransactionType::try_from(first)
            .map_err(|_type| alloy_rlp::Error::Custom(INVALID_TX_TYPE_ERROR_MESSAGE))?;

        *buf = remainder;

        match transaction_type {
            OpTransactionType::Legacy => {
                Err(alloy_rlp::Error::Custom(INVALID_TX_TYPE_ERROR_MESSAGE))
            }
            OpTransactionType::Eip2930 => Eip2930::decode(buf).map(OpTransaction::Eip2930),
            OpTransactionType::Eip1559 => Eip1559::decode(buf).map(OpTransaction::Eip1559),
            OpTransactionType::Deposit => Deposit::decode(buf).map(OpTransaction::Deposit),
        }
    }
}

impl Encodable for OpTransaction {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            OpTransaction::Legacy(tx) => tx.encode(out),
            OpTransaction::Eip2930(tx) => enveloped(Eip2930::TYPE, tx, out),
            OpTransaction::Eip1559(tx) => enveloped(Eip1559::TYPE, tx, out),
            OpTransaction::Deposit(tx) => enveloped(Deposit::TYPE, tx, out),
        }
    }

    fn length(&self) -> usize {
        match self {
            OpTransaction::Legacy(tx) => tx.length(),
            OpTransaction::Eip2930(tx) => tx.length() + 1,
            OpTransaction::Eip1559(tx) => tx.length() + 1,
            OpTransaction::Deposit(tx) => tx.length() + 1,
        }
    }
}

impl TransactionData for OpTransaction {
    fn tx_type(&self) -> u8 {
        self.transaction_type().into()
    }

    fn chain_id(&self) -> u64 {
        match self {
            OpTransaction::Legacy(tx) => tx.chain_id(),
            OpTransaction::Eip2930(tx) => tx.chain_id(),
            OpTransaction::Eip1559(tx) => tx.chain_id(),
            OpTransaction::Deposit(tx) => tx.chain_id(),
        }
    }

    fn access_list(&self) -> &[AccessListItem] {
        match self {
            OpTransaction::Legacy(tx) => tx.access_list(),
            OpTransaction::Eip2930(tx) => tx.access_list(),
            OpTransaction::Eip1559(tx) => tx.access_list(),
            OpTransaction::Deposit(tx) => tx.access_list(),
        }
    }

    fn data(&self) -> &Bytes {
        match self {
            OpTransaction::Legacy(tx) => tx.data(),
            OpTransaction::Eip2930(tx) => tx.data(),
            OpTransaction::Eip1559(tx) => tx.data(),
            OpTransaction::Deposit(tx) => tx.data(),
        }
    }

    fn gas(&self) -> u64 {
        match self {
            OpTransaction::Legacy(tx) => tx.gas(),
            OpTransaction::Eip2930(tx) => tx.gas(),
            OpTransaction::Eip1559(tx) => tx.gas(),
            OpTransaction::Deposit(tx) => tx.gas(),
        }
    }

    fn gas_fee_cap(&self) -> U256 {
        match self {
            OpTransaction::Legacy(tx) => tx.gas_fee_cap(),
            OpTransaction::Eip2930(tx) => tx.gas_fee_cap(),
            OpTransaction::Eip1559(tx) => tx.gas_fee_cap(),
            OpTransaction::Deposit(tx) => tx.gas_fee_cap(),
        }
    }

    fn gas_tip_cap(&self) -> U256 {
        match self {
            OpTransaction::Legacy(tx) => tx.gas_tip_cap(),
            OpTransaction::Eip2930(tx) => tx.gas_tip_cap(),
            OpTransaction::Eip1559(tx) => tx.gas_tip_cap(),
            OpTransaction::Deposit(tx) => tx.gas_tip_cap(),
        }
    }

    fn gas_price(&self) -> U256 {
        match self {
            OpTransaction::Legacy(tx) => tx.gas_price(),
            OpTransaction::Eip2930(tx) => tx.gas_price(),
            OpTransaction::Eip1559(tx) => tx.gas_price(),
            OpTransaction::Deposit(tx) => tx.gas_price(),
        }
    }

    fn value(&self) -> U256 {
        match self {
            OpTransaction::Legacy(tx) => tx.value(),
            OpTransaction::Eip2930(tx) => tx.value(),
            OpTransaction::Eip1559(tx) => tx.value(),
            OpTransaction::Deposit(tx) => tx.value(),
        }
    }

    fn nonce(&self) -> u64 {
        match self {
            OpTransaction::Legacy(tx) => tx.nonce(),
            OpTransaction::Eip2930(tx) => tx.nonce(),
            OpTransaction::Eip1559(tx) => tx.nonce(),
            OpTransaction::Deposit(tx) => tx.nonce(),
        }
    }

    fn to(&self) -> Option<&Address> {
        match self {
            OpTransaction::Legacy(tx) => tx.to(),
            OpTransaction::Eip2930(tx) => tx.to(),
            OpTransaction::Eip1559(tx) => tx.to(),
            OpTransaction::Deposit(tx) => TransactionData::to(tx),
        }
    }

    fn is_system_tx(&self) -> bool {
        match self {
            OpTransaction::Legacy(tx) => tx.is_system_tx(),
            OpTransaction::Eip2930(tx) => tx.is_system_tx(),
            OpTransaction::Eip1559(tx) => tx.is_system_tx(),
            OpTransaction::Deposit(tx) => TransactionData::is_system_tx(tx),
        }
    }

    fn effective_gas_price(&self, dst: &mut U256, base_fee: Option<U256>) {
        match self {
            OpTransaction::Legacy(tx) => tx.effective_gas_price(dst, base_fee),
            OpTransaction::Eip2930(tx) => tx.effective_gas_price(dst, base_fee),
            OpTransaction::Eip1559(tx) => tx.effective_gas_price(dst, base_fee),
            OpTransaction::Deposit(tx) => tx.effective_gas_price(dst, base_fee),
        }
    }

    fn effective_nonce(&self) -> Option<u64> {
        match self {
            OpTransaction::Legacy(tx) => tx.effective_nonce(),
            OpTransaction::Eip2930(tx) => tx.effective_nonce(),
            OpTransaction::Eip1559(tx) => tx.effective_nonce(),
            OpTransaction::Deposit(tx) => tx.effective_nonce(),
        }
    }

    fn signature_hash(&self, chain_id: u64) -> Result<B256, TransactionError> {
        match self {
            OpTransaction::Legacy(tx) => tx.signature_hash(chain_id),
            OpTransaction::Eip2930(tx) => tx.signature_hash(chain_id),
            OpTransaction::Eip1559(tx) => tx.signature_hash(chain_id),
            OpTransaction::Deposit(tx) => tx.signature_hash(chain_id),
        }
    }

    fn raw_signature_values(&self) -> SignatureWithRecoveryId {
        match self {
            OpTransaction::Legacy(tx) => tx.raw_signature_values(),
            OpTransaction::Eip2930(tx) => tx.raw_signature_values(),
            OpTransaction::Eip1559(tx) => tx.raw_signature_values(),
            OpTransaction::Deposit(tx) => tx.raw_signature_values(),
        }
    }

    fn set_signature_values(&mut self, chain_id: u64, signature: SignatureWithRecoveryId) {
        match self {
            OpTransaction::Legacy(tx) => tx.set_signature_values(chain_id, signature),
            OpTransaction::Eip2930(tx) => tx.set_signature_values(chain_id, signature),
            OpTransaction::Eip1559(tx) => tx.set_signature_values(chain_id, signature),
            OpTransaction::Deposit(tx) => tx.set_signature_values(chain_id, signature),
        }
    }

    fn deep_copy(&self) -> Self {
        match self {
            OpTransaction::Legacy(tx) => OpTransaction::Legacy(tx.deep_copy()),
            OpTransaction::Eip2930(tx) => OpTransaction::Eip2930(tx.deep_copy()),
            OpTransaction::Eip1559(tx) => OpTransaction::Eip1559(tx.deep_copy()),
            OpTransaction::Deposit(tx) => OpTransaction::Deposit(tx.deep_copy()),
        }
    }
}
