//! # Outbound Ports
//!
//! The peer transport that frames and delivers encoded messages.

use crate::domain::EncodingError;
use async_trait::async_trait;
use thiserror::Error;

/// Transport failure reported by the network layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// No peer is connected.
    #[error("No connected peer")]
    NotConnected,

    /// The peer connection failed mid-send.
    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Failure of a full send (encode + hand-off).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    /// The message could not be encoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The transport refused the message.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Peer transport - outbound port.
///
/// Implementations own devp2p framing; they receive the message code and
/// the RLP payload separately.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Deliver one message to the connected peer.
    async fn send_message(&self, code: u8, payload: Vec<u8>) -> Result<(), TransportError>;
}
