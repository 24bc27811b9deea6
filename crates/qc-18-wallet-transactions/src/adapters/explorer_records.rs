//! # Explorer JSON Record Source
//!
//! Serves `BootstrapRecordSource` from a block-explorer `txlist` response
//! body: `{"status": "1", "message": "OK", "result": [ ...records ]}`.
//! Fetching the body over HTTP is left to the embedding application.

use crate::domain::{ExplorerTransactionRecord, RecordBatch, SourceError};
use crate::ports::BootstrapRecordSource;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const STATUS_OK: &str = "1";
const NO_TRANSACTIONS: &str = "No transactions found";

#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    message: String,
    #[serde(default)]
    result: serde_json::Value,
}

/// Record source over a captured explorer response body.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    body: String,
}

impl JsonRecordSource {
    /// Wrap a response body.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Parse the body into records, without block filtering.
    ///
    /// Each entry of `result` is read on its own; one that does not have
    /// the record shape is dropped and counted as unreadable.
    ///
    /// # Errors
    /// - `MalformedResponse` if the envelope does not parse or `result` is
    ///   not a list
    /// - `Rejected` if the explorer reported an error status
    pub fn parse(&self) -> Result<RecordBatch, SourceError> {
        let response: ExplorerResponse = serde_json::from_str(&self.body)
            .map_err(|e| SourceError::MalformedResponse(e.to_string()))?;

        if response.status != STATUS_OK {
            if response.message == NO_TRANSACTIONS {
                return Ok(RecordBatch::default());
            }
            // On error the explorer puts the reason in `result`.
            let reason = response
                .result
                .as_str()
                .map(str::to_string)
                .unwrap_or(response.message);
            return Err(SourceError::Rejected(reason));
        }

        let entries = match response.result {
            serde_json::Value::Array(entries) => entries,
            other => {
                return Err(SourceError::MalformedResponse(format!(
                    "expected a record list, found {other}"
                )))
            }
        };

        let mut batch = RecordBatch::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<ExplorerTransactionRecord>(entry) {
                Ok(record) => batch.records.push(record),
                Err(e) => {
                    debug!(index, error = %e, "Dropping unreadable explorer entry");
                    batch.unreadable += 1;
                }
            }
        }
        Ok(batch)
    }
}

#[async_trait]
impl BootstrapRecordSource for JsonRecordSource {
    async fn fetch_transactions(&self, start_block: u64) -> Result<RecordBatch, SourceError> {
        let mut batch = self.parse()?;
        let total = batch.records.len();

        // Records with an unreadable block are kept; conversion rejects them.
        batch
            .records
            .retain(|record| record.block().map_or(true, |block| block >= start_block));

        debug!(
            total,
            kept = batch.records.len(),
            unreadable = batch.unreadable,
            start_block,
            "Explorer records loaded"
        );
        Ok(batch)
    }
}
