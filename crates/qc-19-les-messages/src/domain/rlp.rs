use primitive_types::U256;

// =============================================================================
// RLP ENCODING HELPERS
// =============================================================================

/// Payloads shorter than this use the single-byte prefix form.
const SHORT_PAYLOAD_LIMIT: usize = 56;

/// RLP-encode a byte slice.
pub fn rlp_encode_bytes(data: &[u8]) -> Vec<u8> {
    if data.len() == 1 && data[0] < 0x80 {
        vec![data[0]]
    } else if data.len() < SHORT_PAYLOAD_LIMIT {
        let mut result = Vec::with_capacity(data.len() + 1);
        result.push(0x80 + data.len() as u8);
        result.extend_from_slice(data);
        result
    } else {
        let len_bytes = encode_length(data.len());
        let mut result = Vec::with_capacity(data.len() + len_bytes.len() + 1);
        result.push(0xb7 + len_bytes.len() as u8);
        result.extend_from_slice(&len_bytes);
        result.extend_from_slice(data);
        result
    }
}

/// RLP-encode an unsigned integer as its minimal big-endian bytes.
///
/// Zero encodes as the empty string (`0x80`), never as `0x00`.
pub fn rlp_encode_u64(value: u64) -> Vec<u8> {
    rlp_encode_bytes(strip_leading_zeros(&value.to_be_bytes()))
}

/// RLP-encode a 256-bit unsigned integer as its minimal big-endian bytes.
pub fn rlp_encode_u256(value: &U256) -> Vec<u8> {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    rlp_encode_bytes(strip_leading_zeros(&bytes))
}

/// RLP-encode a list whose items are already RLP-encoded.
pub fn rlp_encode_list(encoded_items: &[Vec<u8>]) -> Vec<u8> {
    let total_len: usize = encoded_items.iter().map(Vec::len).sum();

    let mut result = Vec::with_capacity(total_len + 9);
    if total_len < SHORT_PAYLOAD_LIMIT {
        result.push(0xc0 + total_len as u8);
    } else {
        let len_bytes = encode_length(total_len);
        result.push(0xf7 + len_bytes.len() as u8);
        result.extend_from_slice(&len_bytes);
    }
    for encoded in encoded_items {
        result.extend_from_slice(encoded);
    }
    result
}

/// Encode a length as minimal big-endian bytes.
fn encode_length(len: usize) -> Vec<u8> {
    let bytes = len.to_be_bytes();
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[start..].to_vec()
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
