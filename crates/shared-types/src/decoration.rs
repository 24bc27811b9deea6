//! # Decorated Transactions
//!
//! Semantic interpretation attached to a stored `Transaction`. Produced on
//! demand by a decorator, never persisted.

use crate::entities::{Address, Hash, Transaction, U256};
use serde::{Deserialize, Serialize};

/// What a transaction does, as understood by the decorator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionDecoration {
    /// Plain transfer of the native coin.
    NativeTransfer {
        /// Sender.
        from: Address,
        /// Recipient.
        to: Address,
        /// Amount.
        value: U256,
    },
    /// Deployment of a new contract.
    ContractCreation,
    /// ERC-20 style `transfer(to, value)`.
    TokenTransfer {
        /// Token contract.
        contract: Address,
        /// Token sender (the transaction sender).
        from: Address,
        /// Token recipient.
        to: Address,
        /// Token amount.
        value: U256,
    },
    /// ERC-20 style `approve(spender, value)`.
    TokenApprove {
        /// Token contract.
        contract: Address,
        /// Allowance owner (the transaction sender).
        owner: Address,
        /// Allowed spender.
        spender: Address,
        /// Allowance.
        value: U256,
    },
    /// Any other contract call.
    ContractCall {
        /// Called contract.
        contract: Address,
        /// First four bytes of the call data.
        method_id: [u8; 4],
    },
    /// The decorator could not classify the transaction.
    Unknown,
}

/// A transaction paired with its decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTransaction {
    /// The stored transaction.
    pub transaction: Transaction,
    /// Its semantic interpretation.
    pub decoration: TransactionDecoration,
}

impl FullTransaction {
    /// Pair a transaction with its decoration.
    pub fn new(transaction: Transaction, decoration: TransactionDecoration) -> Self {
        Self {
            transaction,
            decoration,
        }
    }

    /// Hash of the underlying transaction.
    pub fn hash(&self) -> Hash {
        self.transaction.hash
    }
}

/// A decorated transaction and its tag names, used for filter evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionWithTags {
    /// Decorated transaction.
    pub transaction: FullTransaction,
    /// Generated tag names.
    pub tags: Vec<String>,
}

impl TransactionWithTags {
    /// Pair a decorated transaction with its tags.
    pub fn new(transaction: FullTransaction, tags: Vec<String>) -> Self {
        Self { transaction, tags }
    }
}
