// Part of this code was adapted from ethers-rs and is distributed under their
// licenss:
// - https://github.com/gakonst/ethers-rs/blob/cba6f071aedafb766e82e4c2f469ed5e4638337d/LICENSE-APACHE
// - https://github.com/gakonst/ethers-rs/blob/cba6f071aedafb766e82e4c2f469ed5e4638337d/LICENSE-MIT
// For the original context see: https://github.com/gakonst/ethers-rs/blob/cba6f071aedafb766e82e4c2f469ed5e4638337d/ethers-core/src/types/signature.rs

//! Ethereum signature types

mod recovery_id;

pub use k256::SecretKey;
use k256::{elliptic_curve::sec1::ToEncodedPoint, FieldBytes, PublicKey};
use l2tx_primitives::Address;
use sha3::{Digest, Keccak256};

pub use self::recovery_id::SignatureWithRecoveryId;

/// An error involving a signature.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    /// Invalid secret key.
    #[error("Expected 32 byte secret key")]
    InvalidSecretKeyLength,
    /// When parsing a secret key from string to hex
    #[error("Invalid hex")]
    InvalidSecretKeyHex,
    /// The V-value does not map to a recovery ID.
    #[error("Invalid V-value: {0}")]
    InvalidV(u64),
    /// ECDSA error
    #[error(transparent)]
    ECDSAError(#[from] k256::ecdsa::signature::Error),
    /// Elliptic curve error
    #[error(transparent)]
    EllipticCurveError(#[from] k256::elliptic_curve::Error),
}

/// Converts a [`PublicKey`] to an [`Address`].
pub fn public_key_to_address(public_key: PublicKey) -> Address {
    let public_key = public_key.to_encoded_point(/* compress = */ false);
    // First byte is header value
    let pk_bytes = public_key
        .as_bytes()
        .get(1..)
        .expect("uncompressed public key is 65 bytes");
    let hash = Keccak256::digest(pk_bytes);
    // Only take the lower 160 bits of the hash
    let hash_slice = hash.get(12..).expect("hash is 32 bytes");
    Address::from_slice(hash_slice)
}

/// It's dangerous to represent secret keys as native string types, because the
/// native string types have debug, display and serialization implementations
/// that can result in the secrets accidentally leaking to logs. It's marked as
/// deprecated, because it should be only created in exactly one place in the
/// production code.
#[deprecated]
pub struct DangerousSecretKeyStr<'a>(pub &'a str);

// It's marked as deprecated to be thoughtful abouts its usage.
#[allow(deprecated)]
/// Converts a hex string to a secret key.
pub fn secret_key_from_str(
    secret_key: DangerousSecretKeyStr<'_>,
) -> Result<SecretKey, SignatureError> {
    #[allow(deprecated)]
    let str_key = secret_key.0;
    let secret_key = if let Some(stripped) = str_key.strip_prefix("0x") {
        hex::decode(stripped)
    } else {
        hex::decode(str_key)
    }
    // Hex error can leak character, so use opaque one.
    .map_err(|_err| SignatureError::InvalidSecretKeyHex)?;
    let secret_key = FieldBytes::from_exact_iter(secret_key.into_iter())
        .ok_or(SignatureError::InvalidSecretKeyLength)?;
    SecretKey::from_bytes(&secret_key).map_err(SignatureError::EllipticCurveError)
}

#[cfg(test)]
mod tests {
    use l2tx_primitives::address;

    use super::*;

    #[test]
    fn secret_key_to_address() -> anyhow::Result<()> {
        // First default Hardhat account
        #[allow(deprecated)]
        let secret_key = secret_key_from_str(DangerousSecretKeyStr(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        ))?;

        assert_eq!(
            public_key_to_address(secret_key.public_key()),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );

        Ok(())
    }

    #[test]
    fn secret_key_from_str_rejects_invalid_input() {
        #[allow(deprecated)]
        let too_short = secret_key_from_str(DangerousSecretKeyStr("0x1234"));
        assert!(matches!(too_short, Err(SignatureError::InvalidSecretKeyLength)));

        #[allow(deprecated)]
        let not_hex = secret_key_from_str(DangerousSecretKeyStr("0xzz"));
        assert!(matches!(not_hex, Err(SignatureError::InvalidSecretKeyHex)));
    }
}
