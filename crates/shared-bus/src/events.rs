//! # Batch Events
//!
//! Payloads delivered to subscribers.

use shared_types::{FullTransaction, Hash};

/// One delivery on a subscription.
///
/// `sequence` identifies the ingestion call that produced the batch, so a
/// filtered subscriber can tell which batches it was spared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBatch {
    /// Monotonic publish sequence number (starts at 1).
    pub sequence: u64,
    /// Decorated transactions, in the order they were produced.
    pub transactions: Vec<FullTransaction>,
}

impl TransactionBatch {
    /// Number of transactions in the batch.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// True when the batch carries no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Hashes of the carried transactions.
    pub fn hashes(&self) -> Vec<Hash> {
        self.transactions.iter().map(FullTransaction::hash).collect()
    }
}

/// Outcome of one publish call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Sequence number assigned to the batch.
    pub sequence: u64,
    /// Unfiltered subscribers that received the batch.
    pub unfiltered_receivers: usize,
    /// Filtered subscribers that received a non-empty subset.
    pub filtered_receivers: usize,
}
