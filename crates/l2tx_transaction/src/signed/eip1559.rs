use alloy_rlp::{RlpDecodable, RlpEncodable};
use l2tx_eip2930::{AccessList, AccessListItem};
use l2tx_primitives::{Address, Bytes, TxKind, B256, U256};
use l2tx_signer::SignatureWithRecoveryId;

use crate::{utils::signing_hash, TransactionData, TransactionError};

/// An EIP-1559 fee market transaction.
#[derive(Clone, Debug, PartialEq, Eq, RlpDecodable, RlpEncodable)]
pub struct Eip1559 {
    // The order of these fields determines encoding order.
    pub chain_id: u64,
    pub nonce: u64,
    pub max_priority_fee_per_gas: u128,
    pub max_fee_per_gas: u128,
    pub gas_limit: u64,
    pub kind: TxKind,
    pub value: U256,
    pub input: Bytes,
    pub access_list: AccessList,
    /// The V-value holds the Y-parity.
    pub signature: SignatureWithRecoveryId,
}

impl Eip1559 {
    /// The type identifier for an EIP-1559 transaction.
    pub const TYPE: u8 = 2;
}

impl TransactionData for Eip1559 {
    fn tx_type(&self) -> u8 {
        Self::TYPE
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn access_list(&self) -> &[AccessListItem] {
        self.access_list.items()
    }

    fn data(&self) -> &Bytes {
        &self.input
    }

    fn gas(&self) -> u64 {
        self.gas_limit
    }

    fn gas_fee_cap(&self) -> U256 {
        U256::from(self.max_fee_per_gas)
    }

    fn gas_tip_cap(&self) -> U256 {
        U256::from(self.max_priority_fee_per_gas)
    }

    fn gas_price(&self) -> U256 {
        U256::from(self.max_fee_per_gas)
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn to(&self) -> Option<&Address> {
        self.kind.to()
    }

    fn is_system_tx(&self) -> bool {
        false
    }

    fn effective_gas_price(&self, dst: &mut U256, base_fee: Option<U256>) {
        let fee_cap = U256::from(self.max_fee_per_gas);

        *dst = match base_fee {
            Some(base_fee) => U256::from(self.max_priority_fee_per_gas)
                .saturating_add(base_fee)
                .min(fee_cap),
            None => fee_cap,
        };
    }

    fn effective_nonce(&self) -> Option<u64> {
        Some(self.nonce)
    }

    fn signature_hash(&self, chain_id: u64) -> Result<B256, TransactionError> {
        Ok(signing_hash(
            Some(Self::TYPE),
            &[
                &chain_id,
                &self.nonce,
                &self.max_priority_fee_per_gas,
                &self.max_fee_per_gas,
                &self.gas_limit,
                &self.kind,
                &self.value,
                &self.input,
                &self.access_list,
            ],
        ))
    }

    fn raw_signature_values(&self) -> SignatureWithRecoveryId {
        self.signature
    }

    fn set_signature_values(&mut self, chain_id: u64, signature: SignatureWithRecoveryId) {
        self.chain_id = chain_id;
        self.signature = signature;
    }

    fn deep_copy(&self) -> Self {
        Self {
            chain_id: self.chain_id,
            nonce: self.nonce,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            max_fee_per_gas: self.max_fee_per_gas,
            gas_limit: self.gas_limit,
            kind: self.kind,
            value: self.value,
            input: Bytes::copy_from_slice(&self.input),
            access_list: self.access_list.clone(),
            signature: self.signature,
        }
    }
}
