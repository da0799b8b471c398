//! Chain configuration.

/// Chain ID of OP Mainnet.
pub const OP_MAINNET_CHAIN_ID: u64 = 10;

/// Chain ID of OP Sepolia.
pub const OP_SEPOLIA_CHAIN_ID: u64 = 11_155_420;

/// Configuration of the chain that transactions are signed for.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// Human-readable name of the chain.
    pub name: String,
    /// The chain's ID, as used for replay protection of signed transactions.
    pub chain_id: u64,
}

impl ChainConfig {
    /// Constructs a new instance.
    pub fn new(name: impl Into<String>, chain_id: u64) -> Self {
        Self {
            name: name.into(),
            chain_id,
        }
    }

    /// Configuration of OP Mainnet.
    pub fn op_mainnet() -> Self {
        Self::new("OP Mainnet", OP_MAINNET_CHAIN_ID)
    }

    /// Configuration of OP Sepolia.
    pub fn op_sepolia() -> Self {
        Self::new("OP Sepolia", OP_SEPOLIA_CHAIN_ID)
    }
}
