//! # Error Types
//!
//! Defines error types shared between the transaction pipeline and its
//! storage adapters.

use thiserror::Error;

/// Errors raised by a transaction storage backend.
///
/// Any storage error is fatal to the ingestion call that hit it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// A write (transaction upsert or tag insert) failed.
    #[error("Storage write failed: {0}")]
    WriteFailed(String),

    /// A read query (pending, by nonce, paged or by hash) failed.
    #[error("Storage read failed: {0}")]
    ReadFailed(String),
}
