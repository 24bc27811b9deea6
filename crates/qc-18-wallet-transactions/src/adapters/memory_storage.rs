//! # In-Memory Transaction Storage
//!
//! `TransactionStorage` backed by hash maps behind a `parking_lot::RwLock`.
//! Writes and reads can be made to fail on demand to exercise error paths.

use crate::ports::TransactionStorage;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{
    sort_canonically, Hash, StorageError, TagFilter, Transaction, TransactionTag,
};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
struct StorageState {
    transactions: HashMap<Hash, Transaction>,
    tags: HashMap<Hash, BTreeSet<String>>,
}

impl StorageState {
    fn matches(&self, filter: &TagFilter, hash: &Hash) -> bool {
        if filter.is_unfiltered() {
            return true;
        }
        let tags: Vec<&str> = self
            .tags
            .get(hash)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default();
        filter.matches(&tags)
    }

    fn sorted(&self) -> Vec<Transaction> {
        let mut all: Vec<Transaction> = self.transactions.values().cloned().collect();
        sort_canonically(&mut all);
        all
    }
}

/// In-memory transaction store for tests and ephemeral wallets.
#[derive(Default)]
pub struct InMemoryTransactionStorage {
    state: RwLock<StorageState>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl InMemoryTransactionStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent query fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of stored transactions.
    pub fn len(&self) -> usize {
        self.state.read().transactions.len()
    }

    /// True when no transaction is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up one transaction.
    pub fn get(&self, hash: &Hash) -> Option<Transaction> {
        self.state.read().transactions.get(hash).cloned()
    }

    /// Tag names stored for `hash`, sorted.
    pub fn tags_for(&self, hash: &Hash) -> Vec<String> {
        self.state
            .read()
            .tags
            .get(hash)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Total number of tag rows.
    pub fn tag_count(&self) -> usize {
        self.state.read().tags.values().map(BTreeSet::len).sum()
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed("injected write failure".to_string()));
        }
        Ok(())
    }

    fn check_readable(&self) -> Result<(), StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::ReadFailed("injected read failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionStorage for InMemoryTransactionStorage {
    async fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut state = self.state.write();
        for tx in transactions {
            state.transactions.insert(tx.hash, tx.clone());
        }
        Ok(())
    }

    async fn pending_transactions(
        &self,
        filter: &TagFilter,
    ) -> Result<Vec<Transaction>, StorageError> {
        self.check_readable()?;
        let state = self.state.read();
        Ok(state
            .sorted()
            .into_iter()
            .filter(|tx| tx.is_pending() && !tx.is_failed)
            .filter(|tx| state.matches(filter, &tx.hash))
            .collect())
    }

    async fn confirmed_transactions_by_nonces(
        &self,
        nonces: &[u64],
    ) -> Result<Vec<Transaction>, StorageError> {
        self.check_readable()?;
        let wanted: HashSet<u64> = nonces.iter().copied().collect();
        let state = self.state.read();
        Ok(state
            .sorted()
            .into_iter()
            .filter(|tx| !tx.is_pending() && wanted.contains(&tx.nonce))
            .collect())
    }

    async fn transactions_before(
        &self,
        filter: &TagFilter,
        from_hash: Option<Hash>,
        limit: usize,
    ) -> Result<Vec<Transaction>, StorageError> {
        self.check_readable()?;
        let state = self.state.read();
        let all = state.sorted();

        let start = match from_hash {
            None => 0,
            Some(anchor) => match all.iter().position(|tx| tx.hash == anchor) {
                Some(index) => index + 1,
                None => return Ok(Vec::new()),
            },
        };

        Ok(all
            .into_iter()
            .skip(start)
            .filter(|tx| state.matches(filter, &tx.hash))
            .take(limit)
            .collect())
    }

    async fn transactions_by_hashes(
        &self,
        hashes: &[Hash],
    ) -> Result<Vec<Transaction>, StorageError> {
        self.check_readable()?;
        let state = self.state.read();
        Ok(hashes
            .iter()
            .filter_map(|hash| state.transactions.get(hash).cloned())
            .collect())
    }

    async fn save_tags(&self, tags: &[TransactionTag]) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut state = self.state.write();
        for tag in tags {
            state
                .tags
                .entry(tag.transaction_hash)
                .or_default()
                .insert(tag.name.clone());
        }
        Ok(())
    }
}
