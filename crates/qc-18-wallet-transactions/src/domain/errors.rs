//! # Domain Errors
//!
//! Error types for the wallet transaction pipeline.
//!
//! Only `Storage` and `SourceUnavailable` reach callers of the manager.
//! Decoration and record errors are scoped to one row and swallowed.

use shared_types::StorageError;
use thiserror::Error;

/// Errors surfaced by the Transaction Manager.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionManagerError {
    /// The storage backend failed. Remaining pipeline steps were skipped.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The bootstrap record source could not be read.
    #[error("Bootstrap source unavailable: {0}")]
    SourceUnavailable(#[source] SourceError),
}

/// A decorator could not interpret one transaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecorationError {
    /// Call data is too short to carry a method selector.
    #[error("Malformed call data: {len} bytes, selector needs 4")]
    MalformedCallData {
        /// Call data length
        len: usize,
    },

    /// The decorator backend failed for this row.
    #[error("Decorator failed: {0}")]
    Backend(String),
}

/// An explorer record could not be converted to a transaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A required field was empty.
    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    /// A field failed to parse.
    #[error("Invalid field `{field}`: {value:?}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Raw field value
        value: String,
    },
}

/// A bootstrap record source failed as a whole.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The remote source refused or could not serve the request.
    #[error("Source rejected request: {0}")]
    Rejected(String),

    /// The response body could not be parsed.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
