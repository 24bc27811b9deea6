//! # Outbound Ports
//!
//! Traits for external dependencies (storage, decoration, bootstrap source).

use crate::domain::{DecorationError, RecordBatch, SourceError};
use async_trait::async_trait;
use shared_types::{
    Hash, StorageError, TagFilter, Transaction, TransactionDecoration, TransactionTag,
};

/// Durable transaction and tag store - outbound port.
///
/// Rows are keyed by hash. Queries return rows in canonical newest-first
/// order unless stated otherwise.
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// Upsert transactions by hash.
    async fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StorageError>;

    /// Pending, non-failed transactions matching `filter`.
    async fn pending_transactions(
        &self,
        filter: &TagFilter,
    ) -> Result<Vec<Transaction>, StorageError>;

    /// Confirmed transactions carrying any of `nonces`.
    async fn confirmed_transactions_by_nonces(
        &self,
        nonces: &[u64],
    ) -> Result<Vec<Transaction>, StorageError>;

    /// Up to `limit` transactions matching `filter`, strictly after
    /// `from_hash` in canonical order.
    async fn transactions_before(
        &self,
        filter: &TagFilter,
        from_hash: Option<Hash>,
        limit: usize,
    ) -> Result<Vec<Transaction>, StorageError>;

    /// Transactions for `hashes`, in input order, skipping unknown hashes.
    async fn transactions_by_hashes(&self, hashes: &[Hash])
        -> Result<Vec<Transaction>, StorageError>;

    /// Insert tag rows. Duplicates are ignored.
    async fn save_tags(&self, tags: &[TransactionTag]) -> Result<(), StorageError>;
}

/// Semantic decoder - outbound port.
#[async_trait]
pub trait TransactionDecorator: Send + Sync {
    /// Interpret one transaction.
    async fn decorate(
        &self,
        transaction: &Transaction,
    ) -> Result<TransactionDecoration, DecorationError>;
}

/// Remote history listing used to bootstrap a wallet - outbound port.
#[async_trait]
pub trait BootstrapRecordSource: Send + Sync {
    /// Records included at or after `start_block`.
    ///
    /// Entries that cannot be read as records are counted in
    /// `RecordBatch::unreadable` rather than failing the fetch.
    async fn fetch_transactions(&self, start_block: u64) -> Result<RecordBatch, SourceError>;
}
