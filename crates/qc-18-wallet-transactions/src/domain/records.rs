//! # Explorer Records
//!
//! Block-explorer transaction listings, used to bootstrap a fresh wallet
//! before sync catches up. Every field arrives as a string: integers in
//! decimal, bytes as `0x`-prefixed hex.

use super::errors::RecordError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, Transaction, U256};

/// One transaction as listed by a block explorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerTransactionRecord {
    /// Transaction hash.
    pub hash: String,
    /// Sender nonce.
    pub nonce: String,
    /// Sender address.
    pub from: String,
    /// Recipient address, empty for contract creation.
    #[serde(default)]
    pub to: String,
    /// Value in base units.
    #[serde(default)]
    pub value: String,
    /// Gas limit.
    #[serde(default)]
    pub gas: String,
    /// Gas price in base units.
    #[serde(default)]
    pub gas_price: String,
    /// Call data.
    #[serde(default)]
    pub input: String,
    /// Inclusion block, empty while pending.
    #[serde(default)]
    pub block_number: String,
    /// Block timestamp (unix seconds).
    #[serde(default)]
    pub time_stamp: String,
    /// `"1"` when execution failed.
    #[serde(default)]
    pub is_error: String,
}

/// A fetched listing: the readable records plus the number of entries
/// that did not have the record shape at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBatch {
    /// Entries that deserialized as records.
    pub records: Vec<ExplorerTransactionRecord>,
    /// Entries dropped before conversion.
    pub unreadable: usize,
}

impl RecordBatch {
    /// A batch with no unreadable entries.
    pub fn new(records: Vec<ExplorerTransactionRecord>) -> Self {
        Self {
            records,
            unreadable: 0,
        }
    }
}

impl ExplorerTransactionRecord {
    /// Inclusion block, if present and well formed.
    pub fn block(&self) -> Option<u64> {
        self.block_number.parse().ok()
    }
}

fn invalid(field: &'static str, value: &str) -> RecordError {
    RecordError::InvalidField {
        field,
        value: value.to_string(),
    }
}

fn parse_hex(field: &'static str, value: &str) -> Result<Vec<u8>, RecordError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(digits).map_err(|_| invalid(field, value))
}

fn parse_fixed<const N: usize>(field: &'static str, value: &str) -> Result<[u8; N], RecordError> {
    if value.is_empty() {
        return Err(RecordError::MissingField(field));
    }
    parse_hex(field, value)?
        .try_into()
        .map_err(|_| invalid(field, value))
}

fn parse_u64(field: &'static str, value: &str) -> Result<u64, RecordError> {
    if value.is_empty() {
        return Err(RecordError::MissingField(field));
    }
    value.parse().map_err(|_| invalid(field, value))
}

fn parse_u256(field: &'static str, value: &str) -> Result<U256, RecordError> {
    if value.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_dec_str(value).map_err(|_| invalid(field, value))
}

fn parse_optional_u64(field: &'static str, value: &str) -> Result<Option<u64>, RecordError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_u64(field, value).map(Some)
}

impl TryFrom<ExplorerTransactionRecord> for Transaction {
    type Error = RecordError;

    fn try_from(record: ExplorerTransactionRecord) -> Result<Self, Self::Error> {
        let hash: Hash = parse_fixed("hash", &record.hash)?;
        let from: Address = parse_fixed("from", &record.from)?;
        let to: Option<Address> = if record.to.is_empty() {
            None
        } else {
            Some(parse_fixed("to", &record.to)?)
        };

        let block_number = parse_optional_u64("blockNumber", &record.block_number)?;
        let timestamp = parse_optional_u64("timeStamp", &record.time_stamp)?;
        if block_number.is_some() && timestamp.is_none() {
            return Err(RecordError::MissingField("timeStamp"));
        }

        let gas_limit = if record.gas.is_empty() {
            0
        } else {
            parse_u64("gas", &record.gas)?
        };

        Ok(Transaction {
            hash,
            nonce: parse_u64("nonce", &record.nonce)?,
            from,
            to,
            value: parse_u256("value", &record.value)?,
            gas_limit,
            gas_price: parse_u256("gasPrice", &record.gas_price)?,
            input: parse_hex("input", &record.input)?,
            block_number,
            timestamp: block_number.and(timestamp),
            is_failed: record.is_error == "1",
            replaced_with: None,
        })
    }
}
