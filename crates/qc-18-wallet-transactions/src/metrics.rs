//! Pipeline counters for the Transaction Manager
//!
//! ## Usage
//!
//! ```ignore
//! let snapshot = manager.metrics();
//! tracing::info!(replaced = snapshot.transactions_replaced, "wallet stats");
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters updated by the ingestion pipeline.
#[derive(Debug, Default)]
pub struct ManagerMetrics {
    /// Non-empty `handle` calls that completed
    pub batches_handled: AtomicU64,
    /// Transactions received by `handle`
    pub transactions_ingested: AtomicU64,
    /// Pending transactions marked replaced
    pub transactions_replaced: AtomicU64,
    /// Rows the decorator could not interpret
    pub decoration_failures: AtomicU64,
    /// Tag rows written
    pub tags_saved: AtomicU64,
    /// Batches delivered to at least one subscriber
    pub batches_published: AtomicU64,
    /// Explorer records dropped as malformed
    pub records_rejected: AtomicU64,
}

impl ManagerMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record transactions entering `handle`
    pub fn record_ingested(&self, count: usize) {
        self.transactions_ingested
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record reconciliation output
    pub fn record_replaced(&self, count: usize) {
        self.transactions_replaced
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record one swallowed decoration failure
    pub fn record_decoration_failure(&self) {
        self.decoration_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record tag rows written
    pub fn record_tags_saved(&self, count: usize) {
        self.tags_saved.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record a completed batch and whether any subscriber received it
    pub fn record_batch(&self, published: bool) {
        self.batches_handled.fetch_add(1, Ordering::Relaxed);
        if published {
            self.batches_published.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record malformed bootstrap records
    pub fn record_rejected_records(&self, count: usize) {
        self.records_rejected
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> ManagerMetricsSnapshot {
        ManagerMetricsSnapshot {
            batches_handled: self.batches_handled.load(Ordering::Relaxed),
            transactions_ingested: self.transactions_ingested.load(Ordering::Relaxed),
            transactions_replaced: self.transactions_replaced.load(Ordering::Relaxed),
            decoration_failures: self.decoration_failures.load(Ordering::Relaxed),
            tags_saved: self.tags_saved.load(Ordering::Relaxed),
            batches_published: self.batches_published.load(Ordering::Relaxed),
            records_rejected: self.records_rejected.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`ManagerMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ManagerMetricsSnapshot {
    /// Non-empty `handle` calls that completed
    pub batches_handled: u64,
    /// Transactions received by `handle`
    pub transactions_ingested: u64,
    /// Pending transactions marked replaced
    pub transactions_replaced: u64,
    /// Rows the decorator could not interpret
    pub decoration_failures: u64,
    /// Tag rows written
    pub tags_saved: u64,
    /// Batches delivered to at least one subscriber
    pub batches_published: u64,
    /// Explorer records dropped as malformed
    pub records_rejected: u64,
}
