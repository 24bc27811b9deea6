//! # Send Transaction Message
//!
//! Outgoing transaction submission, encoded as
//! `[requestId, [[nonce, gasPrice, gasLimit, to, value, data, v, r, s]]]`.

use super::errors::EncodingError;
use super::rlp::{rlp_encode_bytes, rlp_encode_list, rlp_encode_u256, rlp_encode_u64};
use shared_types::{RawTransaction, Signature};

/// Message code of the light-client `SendTxV2` message.
///
/// The code is carried by the transport framing, not by the payload.
pub const SEND_TX_V2_CODE: u8 = 0x13;

/// Maximum length of the `r` and `s` signature components.
pub const MAX_SIGNATURE_COMPONENT_LEN: usize = 32;

/// A transaction submission to a light-client peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTransactionMessage {
    /// Caller-chosen correlation id.
    pub request_id: u64,
    /// Transaction body.
    pub transaction: RawTransaction,
    /// Signature over the body.
    pub signature: Signature,
}

impl SendTransactionMessage {
    /// Create a new submission message.
    pub fn new(request_id: u64, transaction: RawTransaction, signature: Signature) -> Self {
        Self {
            request_id,
            transaction,
            signature,
        }
    }

    /// Message code for the transport framing.
    pub fn code(&self) -> u8 {
        SEND_TX_V2_CODE
    }

    /// Encode the message payload.
    ///
    /// # Errors
    /// - `EmptySignatureComponent` if `r` or `s` is empty
    /// - `OversizedField` if `r` or `s` is longer than 32 bytes
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        encode_send_transaction(self.request_id, &self.transaction, &self.signature)
    }
}

fn check_signature_component(
    field: &'static str,
    component: &[u8],
) -> Result<(), EncodingError> {
    if component.is_empty() {
        return Err(EncodingError::EmptySignatureComponent(field));
    }
    if component.len() > MAX_SIGNATURE_COMPONENT_LEN {
        return Err(EncodingError::OversizedField {
            field,
            len: component.len(),
            max: MAX_SIGNATURE_COMPONENT_LEN,
        });
    }
    Ok(())
}

/// Encode the 9-field signed transaction list.
///
/// `to = None` (contract creation) encodes as the empty string. The
/// signature components are carried as raw bytes.
///
/// # Errors
/// See [`SendTransactionMessage::encode`].
pub fn encode_signed_transaction(
    transaction: &RawTransaction,
    signature: &Signature,
) -> Result<Vec<u8>, EncodingError> {
    check_signature_component("r", &signature.r)?;
    check_signature_component("s", &signature.s)?;

    let to: &[u8] = match &transaction.to {
        Some(address) => address,
        None => &[],
    };

    Ok(rlp_encode_list(&[
        rlp_encode_u64(transaction.nonce),
        rlp_encode_u256(&transaction.gas_price),
        rlp_encode_u64(transaction.gas_limit),
        rlp_encode_bytes(to),
        rlp_encode_u256(&transaction.value),
        rlp_encode_bytes(&transaction.data),
        rlp_encode_u64(u64::from(signature.v)),
        rlp_encode_bytes(&signature.r),
        rlp_encode_bytes(&signature.s),
    ]))
}

/// Encode a transaction submission message payload.
///
/// # Errors
/// See [`SendTransactionMessage::encode`].
pub fn encode_send_transaction(
    request_id: u64,
    transaction: &RawTransaction,
    signature: &Signature,
) -> Result<Vec<u8>, EncodingError> {
    let signed = encode_signed_transaction(transaction, signature)?;
    let envelope = rlp_encode_list(&[signed]);
    Ok(rlp_encode_list(&[rlp_encode_u64(request_id), envelope]))
}
