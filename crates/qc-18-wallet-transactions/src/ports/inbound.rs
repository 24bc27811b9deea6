//! # Inbound Ports
//!
//! API trait defining what the Transaction Manager can do.

use crate::domain::TransactionManagerError;
use async_trait::async_trait;
use shared_bus::Subscription;
use shared_types::{FullTransaction, Hash, TagFilter, Transaction};

/// Transaction Manager API - inbound port.
#[async_trait]
pub trait TransactionManagerApi: Send + Sync {
    /// Ingest transactions observed during sync.
    ///
    /// Returns the decorated rows touched by this call: the input plus any
    /// pending rows it superseded. An empty input is a no-op.
    async fn handle(
        &self,
        new_transactions: Vec<Transaction>,
    ) -> Result<Vec<FullTransaction>, TransactionManagerError>;

    /// History page strictly after `from_hash`, newest first.
    ///
    /// `from_hash = None` starts at the newest transaction. A `from_hash`
    /// that is not stored yields an empty page.
    async fn full_transactions_before(
        &self,
        tag_filter: &TagFilter,
        from_hash: Option<Hash>,
        limit: Option<usize>,
    ) -> Result<Vec<FullTransaction>, TransactionManagerError>;

    /// Pending, non-failed transactions matching `tag_filter`.
    async fn pending_full_transactions(
        &self,
        tag_filter: &TagFilter,
    ) -> Result<Vec<FullTransaction>, TransactionManagerError>;

    /// Decorate an explicit set of hashes. Unknown hashes are skipped.
    async fn full_transactions(
        &self,
        hashes: &[Hash],
    ) -> Result<Vec<FullTransaction>, TransactionManagerError>;

    /// Every batch produced by `handle`, buffered without bound and never
    /// dropped.
    fn subscribe_all(&self) -> Subscription;

    /// Batches reduced to transactions matching `tag_filter`. Batches with no
    /// match are not delivered.
    fn subscribe_filtered(&self, tag_filter: TagFilter) -> Subscription;
}
