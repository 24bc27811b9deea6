//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Chain**: `Transaction` as observed during synchronization
//! - **Outgoing**: `RawTransaction` + `Signature` handed to the message codec

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 32-byte transaction hash.
pub type Hash = [u8; 32];

/// A 20-byte account address.
pub type Address = [u8; 20];

/// Render bytes as a lowercase `0x`-prefixed hex string.
pub fn to_hex_string(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// A transaction as stored by the wallet.
///
/// INVARIANTS:
/// - pending ⇔ `block_number.is_none()`
/// - `hash` is the primary key; saving twice is an upsert
/// - rows are never deleted, only superseded through `replaced_with`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction hash (primary key).
    pub hash: Hash,
    /// Sender-scoped nonce.
    pub nonce: u64,
    /// Sender address.
    pub from: Address,
    /// Recipient address (`None` for contract creation).
    pub to: Option<Address>,
    /// Transferred value in base units.
    pub value: U256,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas price in base units.
    pub gas_price: U256,
    /// Call data.
    pub input: Vec<u8>,
    /// Block the transaction was included in.
    pub block_number: Option<u64>,
    /// Block timestamp (unix seconds).
    pub timestamp: Option<u64>,
    /// Execution failed, or the transaction was replaced by another with
    /// the same nonce.
    pub is_failed: bool,
    /// Hash of the confirmed transaction that superseded this one.
    pub replaced_with: Option<Hash>,
}

impl Transaction {
    /// Create a pending transaction with empty call data.
    pub fn pending(hash: Hash, from: Address, to: Option<Address>, nonce: u64) -> Self {
        Self {
            hash,
            nonce,
            from,
            to,
            value: U256::zero(),
            gas_limit: 21_000,
            gas_price: U256::zero(),
            input: Vec::new(),
            block_number: None,
            timestamp: None,
            is_failed: false,
            replaced_with: None,
        }
    }

    /// Return a copy of this transaction included at `block_number`.
    #[must_use]
    pub fn confirmed_at(mut self, block_number: u64, timestamp: u64) -> Self {
        self.block_number = Some(block_number);
        self.timestamp = Some(timestamp);
        self
    }

    /// True while the transaction has not been included in a block.
    pub fn is_pending(&self) -> bool {
        self.block_number.is_none()
    }

    /// Mark this transaction as superseded by `replacement`.
    pub fn mark_replaced(&mut self, replacement: Hash) {
        self.is_failed = true;
        self.replaced_with = Some(replacement);
    }

    fn order_key(&self) -> (bool, u64, u64, u64, Hash) {
        (
            self.is_pending(),
            self.block_number.unwrap_or(0),
            self.timestamp.unwrap_or(0),
            self.nonce,
            self.hash,
        )
    }

    /// Compare two transactions in canonical (newest-first) order.
    ///
    /// Pending transactions rank ahead of confirmed ones. `Ordering::Less`
    /// means `self` is newer and sorts first.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        other.order_key().cmp(&self.order_key())
    }
}

/// Sort transactions into canonical newest-first order.
pub fn sort_canonically(transactions: &mut [Transaction]) {
    transactions.sort_by(Transaction::canonical_cmp);
}

// =============================================================================
// CLUSTER B: OUTGOING
// =============================================================================

/// An unsigned transaction body ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Sender nonce.
    pub nonce: u64,
    /// Gas price in base units.
    pub gas_price: U256,
    /// Gas limit.
    pub gas_limit: u64,
    /// Recipient (`None` for contract creation).
    pub to: Option<Address>,
    /// Transferred value.
    pub value: U256,
    /// Call data.
    pub data: Vec<u8>,
}

/// ECDSA signature components as produced by the signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Recovery id (27/28 for legacy transactions).
    pub v: u8,
    /// `r` component, big-endian, at most 32 bytes.
    pub r: Vec<u8>,
    /// `s` component, big-endian, at most 32 bytes.
    pub s: Vec<u8>,
}
