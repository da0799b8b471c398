#[allow(deprecated)]
// This is test code, it's ok to use `DangerousSecretKeyStr`
use l2tx_signer::DangerousSecretKeyStr;
pub use l2tx_signer::{SecretKey, SignatureError};

/// Secret key that was used to generate the signed transaction vectors.
pub const DUMMY_SECRET_KEY: &str =
    "e331b6d69882b4cb4ea581d88e0b604039a3de5967688d3dcffdd2270c0fd109";

/// Converts a hex string to a secret key.
pub fn secret_key_from_str(secret_key: &str) -> Result<SecretKey, SignatureError> {
    // This is test code, it's ok to use `DangerousSecretKeyStr`
    #[allow(deprecated)]
    l2tx_signer::secret_key_from_str(DangerousSecretKeyStr(secret_key))
}

/// Returns the secret key that was used to generate the signed transaction
/// vectors.
pub fn dummy_secret_key() -> Result<SecretKey, SignatureError> {
    secret_key_from_str(DUMMY_SECRET_KEY)
}
