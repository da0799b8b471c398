use alloy_rlp::{BufMut, Encodable, Header};
use l2tx_primitives::{keccak256, B256};

/// RLP-encodes the provided value and prepends it with the provided ID.
pub fn enveloped<T: Encodable>(id: u8, v: &T, out: &mut dyn BufMut) {
    out.put_u8(id);
    v.encode(out);
}

/// RLP-encodes the provided fields as a list.
pub fn encode_list(fields: &[&dyn Encodable], out: &mut dyn BufMut) {
    let payload_length = fields.iter().map(|field| field.length()).sum();
    Header {
        list: true,
        payload_length,
    }
    .encode(out);

    for field in fields {
        field.encode(out);
    }
}

/// Computes the hash of the RLP list of the provided fields, optionally
/// prefixed with a transaction type.
pub fn signing_hash(transaction_type: Option<u8>, fields: &[&dyn Encodable]) -> B256 {
    let mut encoded = Vec::new();
    if let Some(transaction_type) = transaction_type {
        encoded.put_u8(transaction_type);
    }
    encode_list(fields, &mut encoded);

    keccak256(encoded)
}
