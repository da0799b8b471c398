use alloy_rlp::{RlpDecodable, RlpEncodable};
use l2tx_eip2930::{AccessList, AccessListItem};
use l2tx_primitives::{Address, Bytes, TxKind, B256, U256};
use l2tx_signer::SignatureWithRecoveryId;

use crate::{utils::signing_hash, TransactionData, TransactionError};

/// An EIP-2930 transaction, which carries an access list.
#[derive(Clone, Debug, PartialEq, Eq, RlpDecodable, RlpEncodable)]
pub struct Eip2930 {
    // The order of these fields determines encoding order.
    pub chain_id: u64,
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub kind: TxKind,
    pub value: U256,
    pub input: Bytes,
    pub access_list: AccessList,
    /// The V-value holds the Y-parity.
    pub signature: SignatureWithRecoveryId,
}

impl Eip2930 {
    /// The type identifier for an EIP-2930 transaction.
    pub const TYPE: u8 = 1;
}

impl TransactionData for Eip2930 {
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
        Ok(signing_hash(
            Some(Self::TYPE),
            &[
                &chain_id,
                &self.nonce,
                &self.gas_price,
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
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            kind: self.kind,
            value: self.value,
            input: Bytes::copy_from_slice(&self.input),
            access_list: self.access_list.clone(),
            signature: self.signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_rlp::Decodable as _;
    use l2tx_primitives::{address, hex};
    use l2tx_test_utils::secret_key::dummy_secret_key;

    use super::*;

    fn dummy_transaction() -> Eip2930 {
        Eip2930 {
            chain_id: 1,
            nonce: 1,
            gas_price: 2,
            gas_limit: 3,
            kind: TxKind::Call(address!("0xc014ba5ec014ba5ec014ba5ec014ba5ec014ba5e")),
            value: U256::from(4),
            input: Bytes::from_static(&hex!("1234")),
            access_list: AccessList(vec![AccessListItem {
                address: Address::ZERO,
                storage_keys: vec![B256::ZERO, B256::from(U256::from(1))],
            }]),
            signature: SignatureWithRecoveryId::ZERO,
        }
    }

    fn signed_dummy_transaction() -> anyhow::Result<Eip2930> {
        let mut transaction = dummy_transaction();
        let hash = transaction.signature_hash(1)?;

        let mut signature = SignatureWithRecoveryId::new(hash, &dummy_secret_key()?)?;
        signature.v = u64::from(signature.odd_y_parity()?);
        transaction.set_signature_values(1, signature);

        Ok(transaction)
    }

    #[test]
    fn eip2930_signed_transaction_encoding() -> anyhow::Result<()> {
        // Generated by Hardhat
        let expected = hex!(
            "f8bd0101020394c014ba5ec014ba5ec014ba5ec014ba5ec014ba5e04821234f85bf859940000000000000000000000000000000000000000f842a00000000000000000000000000000000000000000000000000000000000000000a0000000000000000000000000000000000000000000000000000000000000000101a0a9f9f0c845cc2d257838df2679a59af6f19055012ce1de11ba25b4ca9df503cfa02c70c54cf6c49b4a641b269c93308fa07de541aa3bcd3fce0fc722aaabe3a8d8"
        );

        let transaction = signed_dummy_transaction()?;

        let encoded = alloy_rlp::encode(&transaction);
        assert_eq!(encoded, expected);

        Ok(())
    }

    #[test]
    fn eip2930_signed_transaction_rlp() -> anyhow::Result<()> {
        let transaction = signed_dummy_transaction()?;

        let encoded = alloy_rlp::encode(&transaction);
        assert_eq!(transaction, Eip2930::decode(&mut encoded.as_slice())?);

        Ok(())
    }

    #[test]
    fn set_signature_values_binds_chain_id() {
        let mut transaction = dummy_transaction();
        transaction.set_signature_values(10, SignatureWithRecoveryId::ZERO);

        assert_eq!(transaction.chain_id(), 10);
    }

    #[test]
    fn deep_copy_is_independent() {
        let transaction = dummy_transaction();
        let mut copy = transaction.deep_copy();
        assert_eq!(copy, transaction);

        copy.access_list.0.clear();
        copy.input = Bytes::new();

        assert_eq!(transaction.access_list().len(), 1);
        assert_eq!(*transaction.data(), Bytes::from_static(&hex!("1234")));
    }
}
