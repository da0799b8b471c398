use alloy_rlp::{RlpDecodable, RlpEncodable};
use l2tx_eip2930::AccessListItem;
use l2tx_primitives::{Address, Bytes, TxKind, B256, U256};
use l2tx_signer::SignatureWithRecoveryId;

use crate::{utils::signing_hash, TransactionData, TransactionError};

/// A legacy transaction, optionally replay-protected by EIP-155.
#[derive(Clone, Debug, PartialEq, Eq, RlpDecodable, RlpEncodable)]
pub struct Legacy {
    // The order of these fields determines encoding order.
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub kind: TxKind,
    pub value: U256,
    pub input: Bytes,
    pub signature: SignatureWithRecoveryId,
}

impl Legacy {
    /// The type identifier for a legacy transaction.
    pub const TYPE: u8 = 0;

    /// Whether the signature commits to a chain ID, as per EIP-155.
    pub fn is_eip155(&self) -> bool {
        self.signature.v >= 35
    }
}

impl TransactionData for Legacy {
    fn tx_type(&self) -> u8 {
        Self::TYPE
    }

    fn chain_id(&self) -> u64 {
        if self.is_eip155() {
            (self.signature.v - 35) / 2
        } else {
            0
        }
    }

    fn access_list(&self) -> &[AccessListItem] {
        &[]
    }

    fn data(&self) -> &Bytes {
        &self.input
    }

    fn gas(&self) -> u64 {
        self.gas_limit
    }

    fn gas_fee_cap(&self) -> U256 {
        U256::from(self.gas_price)
    }

    fn gas_tip_cap(&self) -> U256 {
        U256::from(self.gas_price)
    }

    fn gas_price(&self) -> U256 {
        U256::from(self.gas_price)
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

    fn effective_gas_price(&self, dst: &mut U256, _base_fee: Option<U256>) {
        *dst = U256::from(self.gas_price);
    }

    fn effective_nonce(&self) -> Option<u64> {
        Some(self.nonce)
    }

    fn signature_hash(&self, chain_id: u64) -> Result<B256, TransactionError> {
        let hash = if chain_id == 0 {
            signing_hash(
                None,
                &[
                    &self.nonce,
                    &self.gas_price,
                    &self.gas_limit,
                    &self.kind,
                    &self.value,
                    &self.input,
                ],
            )
        } else {
            signing_hash(
                None,
                &[
                    &self.nonce,
                    &self.gas_price,
                    &self.gas_limit,
                    &self.kind,
                    &self.value,
                    &self.input,
                    &chain_id,
                    &0u8,
                    &0u8,
                ],
            )
        };

        Ok(hash)
    }

    fn raw_signature_values(&self) -> SignatureWithRecoveryId {
        self.signature
    }

    fn set_signature_values(&mut self, _chain_id: u64, signature: SignatureWithRecoveryId) {
        // The V-value already encodes the chain ID.
        self.signature = signature;
    }

    fn deep_copy(&self) -> Self {
        Self {
            nonce: self.nonce,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            kind: self.kind,
            value: self.value,
            input: Bytes::copy_from_slice(&self.input),
            signature: self.signature,
        }
    }
}
