//! # Transaction Sender
//!
//! Assigns request ids and hands encoded `SendTxV2` payloads to the peer
//! transport. Nothing waits for a reply: the wallet learns about inclusion
//! when sync later observes the transaction hash.

use std::sync::atomic::{AtomicU64, Ordering};

use shared_types::{RawTransaction, Signature};
use tracing::{debug, warn};

use crate::domain::SendTransactionMessage;
use crate::ports::{MessageTransport, SendError};

/// Sends signed transactions through a light-client peer.
pub struct TransactionSender<T: MessageTransport> {
    transport: T,
    next_request_id: AtomicU64,
}

impl<T: MessageTransport> TransactionSender<T> {
    /// Create a sender whose first request id is 1.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            next_request_id: AtomicU64::new(1),
        }
    }

    /// The wrapped transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode and send one transaction; returns the request id used.
    ///
    /// Request ids are never reused, even when encoding fails.
    pub async fn send(
        &self,
        transaction: RawTransaction,
        signature: Signature,
    ) -> Result<u64, SendError> {
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let message = SendTransactionMessage::new(request_id, transaction, signature);
        let payload = message.encode()?;

        debug!(
            request_id,
            nonce = message.transaction.nonce,
            bytes = payload.len(),
            "Sending transaction to peer"
        );

        if let Err(e) = self.transport.send_message(message.code(), payload).await {
            warn!(request_id, error = %e, "Transaction submission failed");
            return Err(e.into());
        }
        Ok(request_id)
    }
}
