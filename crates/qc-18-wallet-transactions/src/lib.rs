//! # QC-18 Wallet Transactions
//!
//! Transaction backend of a light account wallet.
//!
//! **Subsystem ID:** 18
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Ingest transactions observed during chain synchronization and keep the
//! wallet's history consistent:
//! - Upsert every observed transaction by hash
//! - Mark pending transactions superseded by a confirmed transaction with
//!   the same sender and nonce
//! - Decorate and tag each affected transaction
//! - Notify subscribers, unfiltered and tag-filtered
//!
//! ## Ingestion Pipeline
//!
//! ```text
//! handle(batch)
//!   │ (ingestion lock held)
//!   ├─ 1. save_transactions(batch)
//!   ├─ 2. reconcile: pending ⨝ confirmed on (from, nonce) → mark replaced
//!   ├─ 3. decorate(batch ∪ replaced)     row failures: warn + skip
//!   ├─ 4. generate tags → save_tags
//!   └─ 5. publish on the bus             unfiltered + filtered feeds
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-wallet-transactions/
//! ├── domain/          # Tags, reconciliation, explorer records, errors
//! ├── ports/           # API trait (inbound) + storage/decorator/source (outbound)
//! ├── application/     # TransactionManager orchestrating the pipeline
//! ├── adapters/        # In-memory storage, call-data decorator, JSON record source
//! ├── metrics.rs       # Pipeline counters
//! └── config.rs        # WalletTransactionsConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;

// Re-exports
pub use adapters::{
    CallDataDecorator, InMemoryTransactionStorage, JsonRecordSource, APPROVE_SELECTOR,
    TRANSFER_SELECTOR,
};
pub use application::TransactionManager;
pub use config::WalletTransactionsConfig;
pub use domain::{
    distinct_nonces, find_replacements, merge_for_decoration, DecorationError,
    ExplorerTransactionRecord, RecordBatch, RecordError, SourceError, TagGenerator, TagKind,
    TransactionManagerError,
};
pub use metrics::{ManagerMetrics, ManagerMetricsSnapshot};
pub use ports::{BootstrapRecordSource, TransactionDecorator, TransactionManagerApi, TransactionStorage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
