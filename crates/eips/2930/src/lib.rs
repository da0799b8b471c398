//! Access lists, as introduced by EIP-2930.
//!
//! <https://eips.ethereum.org/EIPS/eip-2930>

use alloy_rlp::{RlpDecodable, RlpDecodableWrapper, RlpEncodable, RlpEncodableWrapper};
use l2tx_primitives::{Address, B256};

/// A single entry of an access list: an account and the storage slots of that
/// account that a transaction intends to touch.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Hash, RlpDecodable, RlpEncodable, serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    // The order of these fields determines encoding order.
    pub address: Address,
    pub storage_keys: Vec<B256>,
}

/// A list of [`AccessListItem`]s.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    RlpDecodableWrapper,
    RlpEncodableWrapper,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct AccessList(pub Vec<AccessListItem>);

impl AccessList {
    /// Returns the items of the access list.
    pub fn items(&self) -> &[AccessListItem] {
        &self.0
    }
}
