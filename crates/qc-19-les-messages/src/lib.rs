//! # QC-19 Light Client Peer Messages
//!
//! Encodes signed transactions into the message a light-client peer expects
//! for transaction submission.
//!
//! **Subsystem ID:** 19
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Wire Shape
//!
//! ```text
//! [ requestId, [ [nonce, gasPrice, gasLimit, to, value, data, v, r, s] ] ]
//! ```
//!
//! The inner list sits in a single-element outer list: the peer protocol's
//! batch submission envelope, always carrying exactly one transaction here.
//! No response is carried; confirmation arrives later through ordinary sync
//! detecting the transaction by hash.
//!
//! ## Module Structure
//!
//! ```text
//! qc-19-les-messages/
//! ├── domain/          # RLP encoder, SendTransactionMessage, errors
//! ├── ports/           # MessageTransport (outbound)
//! └── application/     # TransactionSender: request ids + transport hand-off
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod domain;
pub mod ports;

// Re-exports
pub use application::TransactionSender;
pub use domain::{
    encode_send_transaction, encode_signed_transaction, rlp_encode_bytes, rlp_encode_list,
    rlp_encode_u256, rlp_encode_u64, EncodingError, SendTransactionMessage, MAX_SIGNATURE_COMPONENT_LEN,
    SEND_TX_V2_CODE,
};
pub use ports::{MessageTransport, SendError, TransportError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
