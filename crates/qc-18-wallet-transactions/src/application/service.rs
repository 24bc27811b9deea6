//! # Transaction Manager
//!
//! Application service orchestrating ingestion, reconciliation, tagging and
//! notification.
//!
//! One `handle` call runs at a time: the ingestion lock spans the upsert,
//! the pending/confirmed read and the replacement write, so two batches can
//! never reconcile against each other's half-written state. Queries and
//! subscriptions do not take the lock.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use shared_bus::{BatchPublisher, InMemoryTransactionBus, Subscription};
use shared_types::{
    FullTransaction, Hash, StorageError, TagFilter, Transaction, TransactionTag,
    TransactionWithTags,
};

use crate::config::WalletTransactionsConfig;
use crate::domain::{
    distinct_nonces, find_replacements, merge_for_decoration, TagGenerator,
    TransactionManagerError,
};
use crate::metrics::{ManagerMetrics, ManagerMetricsSnapshot};
use crate::ports::{
    BootstrapRecordSource, TransactionDecorator, TransactionManagerApi, TransactionStorage,
};

/// Transaction Manager - owns the ingestion pipeline for one wallet.
pub struct TransactionManager<S: TransactionStorage, D: TransactionDecorator> {
    /// Configuration.
    config: WalletTransactionsConfig,
    /// Durable rows.
    storage: Arc<S>,
    /// Semantic decoder.
    decorator: D,
    /// Wallet-relative tag classification.
    tag_generator: TagGenerator,
    /// Notification channels.
    bus: Arc<InMemoryTransactionBus>,
    /// Serializes `handle`.
    ingestion_lock: Mutex<()>,
    /// Pipeline counters.
    metrics: ManagerMetrics,
}

impl<S: TransactionStorage, D: TransactionDecorator> TransactionManager<S, D> {
    /// Create a manager with its own notification bus.
    pub fn new(config: WalletTransactionsConfig, storage: Arc<S>, decorator: D) -> Self {
        Self::with_bus(config, storage, decorator, Arc::new(InMemoryTransactionBus::new()))
    }

    /// Create a manager publishing on a shared bus.
    pub fn with_bus(
        config: WalletTransactionsConfig,
        storage: Arc<S>,
        decorator: D,
        bus: Arc<InMemoryTransactionBus>,
    ) -> Self {
        let tag_generator = TagGenerator::new(config.wallet_address);
        Self {
            config,
            storage,
            decorator,
            tag_generator,
            bus,
            ingestion_lock: Mutex::new(()),
            metrics: ManagerMetrics::new(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &WalletTransactionsConfig {
        &self.config
    }

    /// The storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// The notification bus.
    pub fn bus(&self) -> &Arc<InMemoryTransactionBus> {
        &self.bus
    }

    /// Current counter values.
    pub fn metrics(&self) -> ManagerMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Bootstrap history from a remote record source.
    ///
    /// Malformed records, including entries the source could not read at
    /// all, are dropped and counted; the well-formed ones go through
    /// [`TransactionManagerApi::handle`].
    ///
    /// # Errors
    /// - `SourceUnavailable` if the source fails as a whole
    /// - `Storage` from the ingestion itself
    pub async fn sync_from_source<B>(
        &self,
        source: &B,
        start_block: u64,
    ) -> Result<Vec<FullTransaction>, TransactionManagerError>
    where
        B: BootstrapRecordSource + ?Sized,
        Self: TransactionManagerApi,
    {
        let batch = source.fetch_transactions(start_block).await.map_err(|e| {
            warn!(start_block, error = %e, "Bootstrap source failed");
            TransactionManagerError::SourceUnavailable(e)
        })?;

        let total = batch.records.len() + batch.unreadable;
        let transactions: Vec<Transaction> = batch
            .records
            .into_iter()
            .filter_map(|record| {
                let hash = record.hash.clone();
                match Transaction::try_from(record) {
                    Ok(tx) => Some(tx),
                    Err(e) => {
                        debug!(hash = %hash, error = %e, "Dropping malformed record");
                        None
                    }
                }
            })
            .collect();

        let rejected = total - transactions.len();
        if rejected > 0 {
            self.metrics.record_rejected_records(rejected);
        }
        info!(start_block, total, rejected, "Bootstrap records fetched");

        self.handle(transactions).await
    }

    /// Mark pending rows superseded by confirmed rows and persist them.
    async fn reconcile(&self) -> Result<Vec<Transaction>, StorageError> {
        let pending = self.storage.pending_transactions(&TagFilter::all()).await?;
        if pending.is_empty() {
            debug!("No pending transactions to reconcile");
            return Ok(Vec::new());
        }

        let nonces = distinct_nonces(&pending);
        let confirmed = self
            .storage
            .confirmed_transactions_by_nonces(&nonces)
            .await?;
        let replaced = find_replacements(&pending, &confirmed);

        debug!(
            pending = pending.len(),
            nonces = nonces.len(),
            confirmed = confirmed.len(),
            replaced = replaced.len(),
            "Reconciled pending transactions"
        );

        if !replaced.is_empty() {
            self.storage.save_transactions(&replaced).await?;
            self.metrics.record_replaced(replaced.len());
        }
        Ok(replaced)
    }

    /// Decorate rows 1:1 in order, dropping rows the decorator rejects.
    async fn decorate_all(&self, transactions: Vec<Transaction>) -> Vec<FullTransaction> {
        let mut decorated = Vec::with_capacity(transactions.len());
        for tx in transactions {
            match self.decorator.decorate(&tx).await {
                Ok(decoration) => decorated.push(FullTransaction::new(tx, decoration)),
                Err(e) => {
                    warn!(
                        hash = %shared_types::to_hex_string(&tx.hash),
                        error = %e,
                        "Skipping undecoratable transaction"
                    );
                    self.metrics.record_decoration_failure();
                }
            }
        }
        decorated
    }
}

#[async_trait]
impl<S, D> TransactionManagerApi for TransactionManager<S, D>
where
    S: TransactionStorage + 'static,
    D: TransactionDecorator + 'static,
{
    async fn handle(
        &self,
        new_transactions: Vec<Transaction>,
    ) -> Result<Vec<FullTransaction>, TransactionManagerError> {
        if new_transactions.is_empty() {
            debug!("Empty batch, nothing to handle");
            return Ok(Vec::new());
        }

        let _guard = self.ingestion_lock.lock().await;
        let received = new_transactions.len();
        self.metrics.record_ingested(received);

        self.storage.save_transactions(&new_transactions).await?;
        debug!(count = received, "Transactions saved");

        let replaced = self.reconcile().await?;
        let replaced_count = replaced.len();

        let merged = merge_for_decoration(new_transactions, replaced);
        let decorated = self.decorate_all(merged).await;

        let mut tag_rows: Vec<TransactionTag> = Vec::new();
        let tagged: Vec<TransactionWithTags> = decorated
            .into_iter()
            .map(|full| {
                let rows = self.tag_generator.tag_rows(&full);
                let tags = rows.iter().map(|row| row.name.clone()).collect();
                tag_rows.extend(rows);
                TransactionWithTags::new(full, tags)
            })
            .collect();
        if !tag_rows.is_empty() {
            self.storage.save_tags(&tag_rows).await?;
            self.metrics.record_tags_saved(tag_rows.len());
        }

        let output: Vec<FullTransaction> =
            tagged.iter().map(|t| t.transaction.clone()).collect();

        // Unfiltered subscribers see every batch, even one left empty by
        // decoration failures.
        let report = self.bus.publish(tagged);
        debug!(
            sequence = report.sequence,
            unfiltered = report.unfiltered_receivers,
            filtered = report.filtered_receivers,
            "Batch delivered"
        );
        self.metrics
            .record_batch(report.unfiltered_receivers + report.filtered_receivers > 0);

        info!(
            received,
            replaced = replaced_count,
            decorated = output.len(),
            tags = tag_rows.len(),
            "Handled transaction batch"
        );
        Ok(output)
    }

    async fn full_transactions_before(
        &self,
        tag_filter: &TagFilter,
        from_hash: Option<Hash>,
        limit: Option<usize>,
    ) -> Result<Vec<FullTransaction>, TransactionManagerError> {
        let limit = self.config.page_limit(limit);
        if limit == 0 {
            return Ok(Vec::new());
        }
        let rows = self
            .storage
            .transactions_before(tag_filter, from_hash, limit)
            .await?;
        Ok(self.decorate_all(rows).await)
    }

    async fn pending_full_transactions(
        &self,
        tag_filter: &TagFilter,
    ) -> Result<Vec<FullTransaction>, TransactionManagerError> {
        let rows = self.storage.pending_transactions(tag_filter).await?;
        Ok(self.decorate_all(rows).await)
    }

    async fn full_transactions(
        &self,
        hashes: &[Hash],
    ) -> Result<Vec<FullTransaction>, TransactionManagerError> {
        if hashes.is_empty() {
            return Ok(Vec::new());
        }
        let rows = self.storage.transactions_by_hashes(hashes).await?;
        Ok(self.decorate_all(rows).await)
    }

    fn subscribe_all(&self) -> Subscription {
        self.bus.subscribe_all()
    }

    fn subscribe_filtered(&self, tag_filter: TagFilter) -> Subscription {
        self.bus.subscribe_filtered(tag_filter)
    }
}
