//! # Batch Subscriber
//!
//! Defines the subscription side of the transaction bus.

use crate::events::TransactionBatch;
use shared_types::TagFilter;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::Stream;

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The bus was dropped.
    #[error("Transaction bus closed")]
    Closed,
}

/// A subscription handle for receiving batches.
///
/// Dropping the handle closes the channel; the bus prunes it on the next
/// publish.
pub struct Subscription {
    /// The per-subscriber receiver.
    receiver: mpsc::UnboundedReceiver<TransactionBatch>,

    /// Filter applied by the bus before delivery.
    filter: TagFilter,
}

impl Subscription {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<TransactionBatch>, filter: TagFilter) -> Self {
        Self { receiver, filter }
    }

    /// Receive the next batch.
    ///
    /// # Returns
    ///
    /// - `Some(batch)` - The next delivered batch
    /// - `None` - The bus was dropped and the buffer is drained
    pub async fn recv(&mut self) -> Option<TransactionBatch> {
        self.receiver.recv().await
    }

    /// Try to receive the next batch without waiting.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(batch))` - A batch was buffered
    /// - `Ok(None)` - Nothing buffered yet
    /// - `Err(SubscriptionError::Closed)` - The bus was dropped
    pub fn try_recv(&mut self) -> Result<Option<TransactionBatch>, SubscriptionError> {
        match self.receiver.try_recv() {
            Ok(batch) => Ok(Some(batch)),
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(mpsc::error::TryRecvError::Disconnected) => Err(SubscriptionError::Closed),
        }
    }

    /// Get the filter for this subscription.
    #[must_use]
    pub fn filter(&self) -> &TagFilter {
        &self.filter
    }

    /// Convert into a `Stream` of batches.
    #[must_use]
    pub fn into_stream(self) -> BatchStream {
        BatchStream {
            inner: UnboundedReceiverStream::new(self.receiver),
        }
    }
}

/// A stream wrapper for subscriptions.
///
/// Implements `tokio_stream::Stream` for use with stream combinators.
pub struct BatchStream {
    inner: UnboundedReceiverStream<TransactionBatch>,
}

impl Stream for BatchStream {
    type Item = TransactionBatch;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
