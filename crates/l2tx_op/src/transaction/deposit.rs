use alloy_rlp::{BufMut, Decodable, Encodable, Header, EMPTY_STRING_CODE};
use l2tx_eip2930::AccessListItem;
use l2tx_primitives::{Address, Bytes, TxKind, B256, U256};
use l2tx_transaction::{SignatureWithRecoveryId, TransactionData, TransactionError};

/// Deposit transaction.
///
/// A deposit is derived from an event on L1 rather than signed by its sender,
/// so it has no signature, pays no fees and consumes no nonce.
///
/// For details, see <https://specs.optimism.io/protocol/deposits.html#the-deposited-transaction-type>.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    // The order of these fields determines encoding order.
    /// Hash that uniquely identifies the origin of the deposit.
    pub source_hash: B256,
    /// The address of the sender account.
    pub from: Address,
    /// The address of the recipient account, or [`TxKind::Create`] if the
    /// deposit transaction is a contract creation.
    #[serde(default)]
    pub to: TxKind,
    /// The ETH value to mint on L2, if any.
    pub mint: Option<U256>,
    /// The ETH value to send to the recipient account. Transferred after
    /// minting.
    #[serde(default)]
    pub value: U256,
    /// The gas limit for the L2 transaction.
    #[serde(rename = "gas", with = "alloy_serde::quantity")]
    pub gas_limit: u64,
    /// Field indicating if this transaction is exempt from the L2 gas limit.
    #[serde(rename = "isSystemTx")]
    pub is_system_tx: bool,
    /// The calldata
    #[serde(alias = "input")]
    pub data: Bytes,
}

impl Deposit {
    /// The type identifier for a deposit transaction.
    pub const TYPE: u8 = 0x7E;

    fn payload_length(&self) -> usize {
        self.source_hash.length()
            + self.from.length()
            + self.to.length()
            + self.mint.as_ref().map_or(1, Encodable::length)
            + self.value.length()
            + self.gas_limit.length()
            + self.is_system_tx.length()
            + self.data.length()
    }
}

impl Encodable for Deposit {
    fn encode(&self, out: &mut dyn BufMut) {
        Header {
            list: true,
            payload_length: self.payload_length(),
        }
        .encode(out);

        self.source_hash.encode(out);
        self.from.encode(out);
        self.to.encode(out);
        match &self.mint {
            Some(mint) => mint.encode(out),
            None => out.put_u8(EMPTY_STRING_CODE),
        }
        self.value.encode(out);
        self.gas_limit.encode(out);
        self.is_system_tx.encode(out);
        self.data.encode(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.payload_length();
        payload_length + alloy_rlp::length_of_length(payload_length)
    }
}

impl Decodable for Deposit {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }

        let (mut payload, remainder) = buf
            .split_at_checked(header.payload_length)
            .ok_or(alloy_rlp::Error::InputTooShort)?;

        let source_hash = B256::decode(&mut payload)?;
        let from = Address::decode(&mut payload)?;
        let to = TxKind::decode(&mut payload)?;
        let mint = decode_mint(&mut payload)?;
        let value = U256::decode(&mut payload)?;
        let gas_limit = u64::decode(&mut payload)?;
        let is_system_tx = bool::decode(&mut payload)?;
        let data = Bytes::decode(&mut payload)?;

        if !payload.is_empty() {
            return Err(alloy_rlp::Error::ListLengthMismatch {
                expected: header.payload_length,
                got: header.payload_length - payload.len(),
            });
        }

        *buf = remainder;

        Ok(Self {
            source_hash,
            from,
            to,
            mint,
            value,
            gas_limit,
            is_system_tx,
            data,
        })
    }
}

/// An absent mint is encoded as an empty string.
fn decode_mint(buf: &mut &[u8]) -> alloy_rlp::Result<Option<U256>> {
    if let Some((&EMPTY_STRING_CODE, remainder)) = buf.split_first() {
        *buf = remainder;
        Ok(None)
    } else {
        U256::decode(buf).map(Some)
    }
}

impl TransactionData for Deposit {
    fn tx_type(&self) -> u8 {
        Self::TYPE
    }

    fn chain_id(&self) -> u64 {
        0
    }

    fn access_list(&self) -> &[AccessListItem] {
        &[]
    }

    fn data(&self) -> &Bytes {
        &self.data
    }

    fn gas(&self) -> u64 {
        self.gas_limit
    }

    fn gas_fee_cap(&self) -> U256 {
        U256::ZERO
    }

    fn gas_tip_cap(&self) -> U256 {
        U256::ZERO
    }

    fn gas_price(&self) -> U256 {
        U256::ZERO
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn to(&self) -> Option<&Address> {
        self.to.to()
    }

    fn is_system_tx(&self) -> bool {
        self.is_system_tx
    }

    fn effective_gas_price(&self, dst: &mut U256, _base_fee: Option<U256>) {
        // Deposits never take part in the fee market.
        *dst = U256::ZERO;
    }

    fn effective_nonce(&self) -> Option<u64> {
        None
    }

    fn signature_hash(&self, _chain_id: u64) -> Result<B256, TransactionError> {
        Err(TransactionError::UnsupportedOperation {
            operation: "signature_hash",
            transaction_type: Self::TYPE,
        })
    }

    fn raw_signature_values(&self) -> SignatureWithRecoveryId {
        SignatureWithRecoveryId::ZERO
    }

    fn set_signature_values(&mut self, _chain_id: u64, _signature: SignatureWithRecoveryId) {
        log::trace!(
            "Ignoring signature of deposit transaction with source hash {}",
            self.source_hash
        );
    }

    fn deep_copy(&self) -> Self {
        Self {
            source_hash: self.source_hash,
            from: self.from,
            to: self.to,
            mint: self.mint,
            value: self.value,
            gas_limit: self.gas_limit,
            is_system_tx: self.is_system_tx,
            data: Bytes::copy_from_slice(&self.data),
        }
    }
}
