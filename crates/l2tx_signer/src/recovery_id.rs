use alloy_rlp::{BufMut, Decodable, Encodable};
use k256::{
    ecdsa::{
        signature::hazmat::PrehashSigner, RecoveryId, Signature as ECDSASignature, SigningKey,
        VerifyingKey,
    },
    FieldBytes, SecretKey,
};
use l2tx_primitives::{Address, B256, U256};

use super::{public_key_to_address, SignatureError};

/// An ECDSA signature with recovery ID, in the `(v, r, s)` shape in which
/// transactions carry it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignatureWithRecoveryId {
    /// R value
    pub r: U256,
    /// S Value
    pub s: U256,
    /// V value
    pub v: u64,
}

impl SignatureWithRecoveryId {
    /// The all-zero signature triple.
    pub const ZERO: Self = Self {
        r: U256::ZERO,
        s: U256::ZERO,
        v: 0,
    };

    /// Signs the provided message hash with the secret key.
    ///
    /// The resulting V-value is in Electrum notation (27 or 28). Callers are
    /// responsible for converting it to the notation of their transaction
    /// type.
    pub fn new(message_hash: B256, secret_key: &SecretKey) -> Result<Self, SignatureError> {
        let signing_key: SigningKey = secret_key.into();
        let (signature, recovery_id) = PrehashSigner::<(ECDSASignature, RecoveryId)>::sign_prehash(
            &signing_key,
            message_hash.as_slice(),
        )
        .map_err(SignatureError::ECDSAError)?;

        let r = U256::from_be_slice(Into::<FieldBytes>::into(signature.r()).as_slice());
        let s = U256::from_be_slice(Into::<FieldBytes>::into(signature.s()).as_slice());
        let v = 27 + u64::from(Into::<u8>::into(recovery_id));

        Ok(Self { r, s, v })
    }

    /// Whether all values of the signature are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns whether the V value has odd Y parity.
    pub fn odd_y_parity(&self) -> Result<bool, SignatureError> {
        normalize_recovery_id(self.v).map(|recovery_id| recovery_id == 1)
    }

    /// Recovers the Ethereum address which was used to sign the given message
    /// hash.
    pub fn recover(&self, message_hash: B256) -> Result<Address, SignatureError> {
        let (signature, recovery_id) = self.as_signature()?;

        let verifying_key =
            VerifyingKey::recover_from_prehash(message_hash.as_slice(), &signature, recovery_id)
                .map_err(SignatureError::ECDSAError)?;

        Ok(public_key_to_address(verifying_key.into()))
    }

    /// Retrieves the recovery signature.
    fn as_signature(&self) -> Result<(ECDSASignature, RecoveryId), SignatureError> {
        let recovery_id = self.recovery_id()?;
        let signature = {
            let mut bytes = [0u8; 64];
            let (r_bytes, s_bytes) = bytes.split_at_mut(32);
            r_bytes.copy_from_slice(&self.r.to_be_bytes::<32>());
            s_bytes.copy_from_slice(&self.s.to_be_bytes::<32>());

            ECDSASignature::from_slice(&bytes).map_err(SignatureError::ECDSAError)?
        };

        Ok((signature, recovery_id))
    }

    /// Retrieve the recovery ID.
    pub fn recovery_id(&self) -> Result<RecoveryId, SignatureError> {
        let standard_v = normalize_recovery_id(self.v)?;
        RecoveryId::try_from(standard_v).map_err(SignatureError::ECDSAError)
    }
}

// We need a custom implementation to avoid the struct being treated as an RLP
// list.
impl Decodable for SignatureWithRecoveryId {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let decoded = Self {
            // The order of these fields determines decoding order.
            v: u64::decode(buf)?,
            r: U256::decode(buf)?,
            s: U256::decode(buf)?,
        };

        Ok(decoded)
    }
}

// We need a custom implementation to avoid the struct being treated as an RLP
// list.
impl Encodable for SignatureWithRecoveryId {
    fn encode(&self, out: &mut dyn BufMut) {
        // The order of these fields determines encoding order.
        self.v.encode(out);
        self.r.encode(out);
        self.s.encode(out);
    }

    fn length(&self) -> usize {
        self.r.length() + self.s.length() + self.v.length()
    }
}

fn normalize_recovery_id(v: u64) -> Result<u8, SignatureError> {
    match v {
        0 | 27 => Ok(0),
        1 | 28 => Ok(1),
        v if v >= 35 => Ok(((v - 1) % 2) as u8),
        v => Err(SignatureError::InvalidV(v)),
    }
}
