use l2tx_chain_config::ChainConfig;
use l2tx_primitives::Address;
use l2tx_signer::{SecretKey, SignatureError};
use l2tx_transaction::{SignatureWithRecoveryId, TransactionData, TransactionError};

use crate::transaction::OpTransaction;

/// Determines and attaches the senders of transactions for a specific chain.
///
/// The sender of a deposit transaction is part of the transaction itself. The
/// sender of any other transaction is recovered from its signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signer {
    chain_id: u64,
}

impl Signer {
    /// Constructs a signer for the chain with the provided ID.
    pub fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }

    /// Returns the ID of the chain that the signer is bound to.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Returns the sender of the transaction.
    ///
    /// Legacy transactions without EIP-155 replay protection are accepted on
    /// any chain. All other signed transactions must be bound to the signer's
    /// chain. The V-value must be in the notation of the transaction's type:
    /// 27 or 28 for unprotected legacy transactions, at least 35 for EIP-155
    /// legacy transactions, and the Y-parity for typed transactions.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn sender(&self, transaction: &OpTransaction) -> Result<Address, TransactionError> {
        let signature = transaction.raw_signature_values();

        let chain_id = match transaction {
            OpTransaction::Deposit(deposit) => return Ok(deposit.from),
            OpTransaction::Legacy(legacy) if !legacy.is_eip155() => {
                if !matches!(signature.v, 27 | 28) {
                    return Err(SignatureError::InvalidV(signature.v).into());
                }

                0
            }
            OpTransaction::Legacy(_) => self.validate_chain_id(transaction)?,
            OpTransaction::Eip2930(_) | OpTransaction::Eip1559(_) => {
                if signature.v > 1 {
                    return Err(SignatureError::InvalidV(signature.v).into());
                }

                self.validate_chain_id(transaction)?
            }
        };

        let hash = transaction.signature_hash(chain_id)?;
        let sender = signature.recover(hash)?;

        Ok(sender)
    }

    /// Signs the transaction for the signer's chain.
    ///
    /// Deposit transactions cannot be signed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn sign(
        &self,
        mut transaction: OpTransaction,
        secret_key: &SecretKey,
    ) -> Result<OpTransaction, TransactionError> {
        let hash = transaction.signature_hash(self.chain_id)?;
        let signature = SignatureWithRecoveryId::new(hash, secret_key)?;
        let odd_y_parity = u64::from(signature.odd_y_parity()?);

        let v = match &transaction {
            OpTransaction::Legacy(_) if self.chain_id == 0 => 27 + odd_y_parity,
            OpTransaction::Legacy(_) => self
                .chain_id
                .saturating_mul(2)
                .saturating_add(35 + odd_y_parity),
            OpTransaction::Eip2930(_) | OpTransaction::Eip1559(_) | OpTransaction::Deposit(_) => {
                odd_y_parity
            }
        };

        transaction.set_signature_values(self.chain_id, SignatureWithRecoveryId { v, ..signature });

        Ok(transaction)
    }

    fn validate_chain_id(&self, transaction: &OpTransaction) -> Result<u64, TransactionError> {
        let actual = transaction.chain_id();
        if actual != self.chain_id {
            log::debug!(
                "Rejecting transaction for chain {actual} on chain {}",
                self.chain_id
            );

            return Err(TransactionError::ChainIdMismatch {
                expected: self.chain_id,
                actual,
            });
        }

        Ok(actual)
    }
}

impl From<&ChainConfig> for Signer {
    fn from(config: &ChainConfig) -> Self {
        Self::new(config.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use l2tx_chain_config::OP_MAINNET_CHAIN_ID;
    use l2tx_eip2930::AccessList;
    use l2tx_primitives::{address, Bytes, TxKind, B256, U256};
    use l2tx_signer::public_key_to_address;
    use l2tx_test_utils::secret_key::dummy_secret_key;

    use super::*;
    use crate::transaction::{Deposit, Eip1559, Eip2930, Legacy};

    const RECIPIENT: Address = address!("0xc014ba5ec014ba5ec014ba5ec014ba5ec014ba5e");

    fn legacy() -> Legacy {
        Legacy {
            nonce: 1,
            gas_price: 2,
            gas_limit: 30_000,
            kind: TxKind::Call(RECIPIENT),
            value: U256::from(3),
            input: Bytes::from_static(&[0x12, 0x34]),
            signature: SignatureWithRecoveryId::ZERO,
        }
    }

    fn eip2930() -> Eip2930 {
        Eip2930 {
            chain_id: 0,
            nonce: 1,
            gas_price: 2,
            gas_limit: 30_000,
            kind: TxKind::Call(RECIPIENT),
            value: U256::from(3),
            input: Bytes::from_static(&[0x12, 0x34]),
            access_list: AccessList::default(),
            signature: SignatureWithRecoveryId::ZERO,
        }
    }

    fn eip1559() -> Eip1559 {
        Eip1559 {
            chain_id: 0,
            nonce: 1,
            max_priority_fee_per_gas: 2,
            max_fee_per_gas: 5,
            gas_limit: 30_000,
            kind: TxKind::Create,
            value: U256::from(3),
            input: Bytes::from_static(&[0x12, 0x34]),
            access_list: AccessList::default(),
            signature: SignatureWithRecoveryId::ZERO,
        }
    }

    fn deposit() -> Deposit {
        Deposit {
            source_hash: B256::ZERO,
            from: address!("0xdeaddeaddeaddeaddeaddeaddeaddeaddead0001"),
            to: TxKind::Call(address!("0x4200000000000000000000000000000000000015")),
            mint: None,
            value: U256::ZERO,
            gas_limit: 1_000_000,
            is_system_tx: false,
            data: Bytes::new(),
        }
    }

    #[test]
    fn sign_and_recover() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;
        let expected = public_key_to_address(secret_key.public_key());

        let signer = Signer::from(&ChainConfig::op_mainnet());

        for transaction in [
            OpTransaction::from(legacy()),
            OpTransaction::from(eip2930()),
            OpTransaction::from(eip1559()),
        ] {
            let signed = signer.sign(transaction, &secret_key)?;

            assert_eq!(signed.chain_id(), OP_MAINNET_CHAIN_ID);
            assert_eq!(signer.sender(&signed)?, expected);

            let decoded = OpTransaction::decode_binary(&signed.encode_binary())?;
            assert_eq!(signer.sender(&decoded)?, expected);
        }

        Ok(())
    }

    #[test]
    fn legacy_v_value_encodes_chain_id() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;
        let signer = Signer::new(OP_MAINNET_CHAIN_ID);

        let signed = signer.sign(OpTransaction::from(legacy()), &secret_key)?;
        let OpTransaction::Legacy(legacy) = &signed else {
            panic!("Expected a legacy transaction");
        };

        assert!(legacy.is_eip155());
        assert!(matches!(legacy.signature.v, 55 | 56));

        Ok(())
    }

    #[test]
    fn typed_v_value_is_y_parity() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;
        let signer = Signer::new(OP_MAINNET_CHAIN_ID);

        let signed = signer.sign(OpTransaction::from(eip1559()), &secret_key)?;

        assert!(signed.raw_signature_values().v <= 1);

        Ok(())
    }

    #[test]
    fn pre_eip155_legacy_is_accepted_on_any_chain() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;
        let expected = public_key_to_address(secret_key.public_key());

        let signed = Signer::new(0).sign(OpTransaction::from(legacy()), &secret_key)?;
        assert_eq!(signed.chain_id(), 0);
        assert!(matches!(signed.raw_signature_values().v, 27 | 28));

        assert_eq!(Signer::new(OP_MAINNET_CHAIN_ID).sender(&signed)?, expected);

        Ok(())
    }

    #[test]
    fn unprotected_legacy_requires_electrum_v() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;

        let signed = Signer::new(0).sign(OpTransaction::from(legacy()), &secret_key)?;
        let OpTransaction::Legacy(mut legacy) = signed else {
            panic!("Expected a legacy transaction");
        };
        let v = legacy.signature.v - 27;
        legacy.signature.v = v;

        let encoded = OpTransaction::from(legacy).encode_binary();
        let transaction = OpTransaction::decode_binary(&encoded)?;
        let result = Signer::new(OP_MAINNET_CHAIN_ID).sender(&transaction);
        assert!(matches!(
            result,
            Err(TransactionError::Signature(SignatureError::InvalidV(actual))) if actual == v
        ));

        Ok(())
    }

    #[test]
    fn legacy_v_between_electrum_and_eip155_is_rejected() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;

        let signed = Signer::new(0).sign(OpTransaction::from(legacy()), &secret_key)?;
        let OpTransaction::Legacy(mut legacy) = signed else {
            panic!("Expected a legacy transaction");
        };
        legacy.signature.v = 29;

        let result = Signer::new(OP_MAINNET_CHAIN_ID).sender(&OpTransaction::from(legacy));
        assert!(matches!(
            result,
            Err(TransactionError::Signature(SignatureError::InvalidV(29)))
        ));

        Ok(())
    }

    #[test]
    fn typed_transaction_requires_y_parity_v() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;
        let signer = Signer::new(OP_MAINNET_CHAIN_ID);

        let signed = signer.sign(OpTransaction::from(eip1559()), &secret_key)?;
        let OpTransaction::Eip1559(mut eip1559) = signed else {
            panic!("Expected an EIP-1559 transaction");
        };
        let v = eip1559.signature.v + 27;
        eip1559.signature.v = v;

        let result = signer.sender(&OpTransaction::from(eip1559));
        assert!(matches!(
            result,
            Err(TransactionError::Signature(SignatureError::InvalidV(actual))) if actual == v
        ));

        Ok(())
    }

    #[test]
    fn chain_id_mismatch() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;

        let signed = Signer::from(&ChainConfig::op_sepolia())
            .sign(OpTransaction::from(eip1559()), &secret_key)?;

        let result = Signer::from(&ChainConfig::op_mainnet()).sender(&signed);
        assert!(matches!(
            result,
            Err(TransactionError::ChainIdMismatch {
                expected: OP_MAINNET_CHAIN_ID,
                ..
            })
        ));

        Ok(())
    }

    #[test]
    fn deposit_sender_is_from() -> anyhow::Result<()> {
        let transaction = OpTransaction::from(deposit());

        let sender = Signer::new(OP_MAINNET_CHAIN_ID).sender(&transaction)?;
        assert_eq!(sender, *transaction.deposit_sender()?);

        // The sender of a deposit is independent of the chain.
        assert_eq!(Signer::new(1).sender(&transaction)?, sender);

        Ok(())
    }

    #[test]
    fn deposit_cannot_be_signed() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;

        let result =
            Signer::new(OP_MAINNET_CHAIN_ID).sign(OpTransaction::from(deposit()), &secret_key);
        assert!(matches!(
            result,
            Err(TransactionError::UnsupportedOperation { .. })
        ));

        Ok(())
    }

    #[test]
    fn tampered_signature_recovers_different_sender() -> anyhow::Result<()> {
        let secret_key = dummy_secret_key()?;
        let expected = public_key_to_address(secret_key.public_key());
        let signer = Signer::new(OP_MAINNET_CHAIN_ID);

        let signed = signer.sign(OpTransaction::from(eip1559()), &secret_key)?;
        let OpTransaction::Eip1559(mut tampered) = signed else {
            panic!("Expected an EIP-1559 transaction");
        };
        tampered.value = U256::from(1_000);

        let sender = signer.sender(&OpTransaction::from(tampered));
        assert!(!matches!(sender, Ok(sender) if sender == expected));

        Ok(())
    }

    #[test]
    fn signer_from_chain_config() {
        let config = ChainConfig::new("Custom", 901);

        assert_eq!(Signer::from(&config).chain_id(), 901);
    }
}
