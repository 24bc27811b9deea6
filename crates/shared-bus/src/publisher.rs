//! # Batch Publisher
//!
//! Defines the publishing side of the transaction bus.

use crate::events::{PublishReport, TransactionBatch};
use crate::subscriber::Subscription;
use parking_lot::Mutex;
use shared_types::{FullTransaction, TagFilter, TransactionWithTags};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Trait for publishing decorated batches.
///
/// Publishing is fire-and-forget: it never waits on a subscriber.
pub trait BatchPublisher: Send + Sync {
    /// Publish one tagged batch to both feeds.
    ///
    /// Unfiltered subscribers receive every transaction; filtered
    /// subscribers receive the matching subset, or nothing when the subset
    /// is empty.
    fn publish(&self, batch: Vec<TransactionWithTags>) -> PublishReport;

    /// Get the total number of batches published.
    fn batches_published(&self) -> u64;
}

struct FilteredSender {
    filter: TagFilter,
    sender: mpsc::UnboundedSender<TransactionBatch>,
}

/// In-memory implementation of the transaction bus.
///
/// Each subscriber owns an unbounded `tokio::sync::mpsc` channel, so a slow
/// consumer only grows its own buffer and never loses a batch.
pub struct InMemoryTransactionBus {
    /// Unfiltered subscribers.
    unfiltered: Mutex<Vec<mpsc::UnboundedSender<TransactionBatch>>>,

    /// Tag-filtered subscribers.
    filtered: Mutex<Vec<FilteredSender>>,

    /// Total batches published.
    batches_published: AtomicU64,
}

impl InMemoryTransactionBus {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            unfiltered: Mutex::new(Vec::new()),
            filtered: Mutex::new(Vec::new()),
            batches_published: AtomicU64::new(0),
        }
    }

    /// Subscribe to every batch.
    #[must_use]
    pub fn subscribe_all(&self) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.unfiltered.lock().push(sender);
        debug!("New unfiltered subscription created");
        Subscription::new(receiver, TagFilter::all())
    }

    /// Subscribe to the subset of each batch matching `filter`.
    #[must_use]
    pub fn subscribe_filtered(&self, filter: TagFilter) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.filtered.lock().push(FilteredSender {
            filter: filter.clone(),
            sender,
        });
        debug!(groups = ?filter.groups(), "New filtered subscription created");
        Subscription::new(receiver, filter)
    }

    /// Number of live subscriptions across both feeds.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let unfiltered = self
            .unfiltered
            .lock()
            .iter()
            .filter(|s| !s.is_closed())
            .count();
        let filtered = self
            .filtered
            .lock()
            .iter()
            .filter(|s| !s.sender.is_closed())
            .count();
        unfiltered + filtered
    }

    fn publish_unfiltered(&self, sequence: u64, transactions: Vec<FullTransaction>) -> usize {
        let mut senders = self.unfiltered.lock();
        senders.retain(|sender| {
            sender
                .send(TransactionBatch {
                    sequence,
                    transactions: transactions.clone(),
                })
                .is_ok()
        });
        senders.len()
    }

    fn publish_filtered(&self, sequence: u64, batch: &[TransactionWithTags]) -> usize {
        let mut delivered = 0;
        let mut senders = self.filtered.lock();
        senders.retain(|subscriber| {
            if subscriber.sender.is_closed() {
                return false;
            }

            let matching: Vec<FullTransaction> = batch
                .iter()
                .filter(|tagged| subscriber.filter.matches(&tagged.tags))
                .map(|tagged| tagged.transaction.clone())
                .collect();

            if matching.is_empty() {
                trace!(sequence, "Filtered batch empty, delivery skipped");
                return true;
            }

            let sent = subscriber
                .sender
                .send(TransactionBatch {
                    sequence,
                    transactions: matching,
                })
                .is_ok();
            if sent {
                delivered += 1;
            }
            sent
        });
        delivered
    }
}

impl Default for InMemoryTransactionBus {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchPublisher for InMemoryTransactionBus {
    fn publish(&self, batch: Vec<TransactionWithTags>) -> PublishReport {
        let sequence = self.batches_published.fetch_add(1, Ordering::Relaxed) + 1;

        let transactions: Vec<FullTransaction> =
            batch.iter().map(|tagged| tagged.transaction.clone()).collect();
        let size = transactions.len();

        let unfiltered_receivers = self.publish_unfiltered(sequence, transactions);
        let filtered_receivers = self.publish_filtered(sequence, &batch);

        debug!(
            sequence,
            size,
            unfiltered = unfiltered_receivers,
            filtered = filtered_receivers,
            "Batch published"
        );

        PublishReport {
            sequence,
            unfiltered_receivers,
            filtered_receivers,
        }
    }

    fn batches_published(&self) -> u64 {
        self.batches_published.load(Ordering::Relaxed)
    }
}
