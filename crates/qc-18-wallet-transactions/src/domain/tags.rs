//! # Tag Generation
//!
//! Classifies a decorated transaction into the closed set of tag kinds the
//! wallet queries by. Storage keeps the rendered names as free-form strings.
//!
//! ## Tag Order
//!
//! ```text
//! [direction...] [kind] [kind_0x<address>]
//!  incoming       tokenTransfer  tokenTransfer_0x<contract>
//!  outgoing
//! ```

use shared_types::{to_hex_string, Address, FullTransaction, TransactionDecoration, TransactionTag};
use std::fmt;

/// A tag classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// The wallet receives value or tokens.
    Incoming,
    /// The wallet sent the transaction.
    Outgoing,
    /// Plain native coin transfer.
    NativeTransfer,
    /// Contract deployment.
    ContractCreation,
    /// Token transfer on any contract.
    TokenTransfer,
    /// Token transfer on a specific contract.
    TokenTransferOf(Address),
    /// Token approval on any contract.
    TokenApprove,
    /// Token approval on a specific contract.
    TokenApproveOf(Address),
    /// Call into any contract.
    ContractCall,
    /// Call into a specific contract.
    ContractCallOf(Address),
}

impl TagKind {
    /// Rendered tag name as stored and matched by filters.
    pub fn name(&self) -> String {
        match self {
            TagKind::Incoming => "incoming".to_string(),
            TagKind::Outgoing => "outgoing".to_string(),
            TagKind::NativeTransfer => "nativeTransfer".to_string(),
            TagKind::ContractCreation => "contractCreation".to_string(),
            TagKind::TokenTransfer => "tokenTransfer".to_string(),
            TagKind::TokenTransferOf(contract) => {
                format!("tokenTransfer_{}", to_hex_string(contract))
            }
            TagKind::TokenApprove => "tokenApprove".to_string(),
            TagKind::TokenApproveOf(contract) => {
                format!("tokenApprove_{}", to_hex_string(contract))
            }
            TagKind::ContractCall => "contractCall".to_string(),
            TagKind::ContractCallOf(contract) => {
                format!("contractCall_{}", to_hex_string(contract))
            }
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Generates tags relative to one wallet address.
///
/// Pure and infallible: the same transaction always yields the same tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagGenerator {
    wallet: Address,
}

impl TagGenerator {
    /// Create a generator for `wallet`.
    pub fn new(wallet: Address) -> Self {
        Self { wallet }
    }

    /// The wallet address tags are relative to.
    pub fn wallet(&self) -> Address {
        self.wallet
    }

    /// Classify a decorated transaction.
    pub fn kinds(&self, full: &FullTransaction) -> Vec<TagKind> {
        let mut kinds = Vec::with_capacity(4);

        if self.is_incoming(&full.decoration) {
            kinds.push(TagKind::Incoming);
        }
        if full.transaction.from == self.wallet {
            kinds.push(TagKind::Outgoing);
        }

        match &full.decoration {
            TransactionDecoration::NativeTransfer { .. } => kinds.push(TagKind::NativeTransfer),
            TransactionDecoration::ContractCreation => kinds.push(TagKind::ContractCreation),
            TransactionDecoration::TokenTransfer { contract, .. } => {
                kinds.push(TagKind::TokenTransfer);
                kinds.push(TagKind::TokenTransferOf(*contract));
            }
            TransactionDecoration::TokenApprove { contract, .. } => {
                kinds.push(TagKind::TokenApprove);
                kinds.push(TagKind::TokenApproveOf(*contract));
            }
            TransactionDecoration::ContractCall { contract, .. } => {
                kinds.push(TagKind::ContractCall);
                kinds.push(TagKind::ContractCallOf(*contract));
            }
            TransactionDecoration::Unknown => {}
        }

        kinds
    }

    /// Rendered tag names, ordered and duplicate-free.
    pub fn generate(&self, full: &FullTransaction) -> Vec<String> {
        self.kinds(full).iter().map(TagKind::name).collect()
    }

    /// Tag rows ready for storage.
    pub fn tag_rows(&self, full: &FullTransaction) -> Vec<TransactionTag> {
        let hash = full.hash();
        self.generate(full)
            .into_iter()
            .map(|name| TransactionTag::new(name, hash))
            .collect()
    }

    fn is_incoming(&self, decoration: &TransactionDecoration) -> bool {
        match decoration {
            TransactionDecoration::NativeTransfer { to, .. } => *to == self.wallet,
            TransactionDecoration::TokenTransfer { to, .. } => *to == self.wallet,
            _ => false,
        }
    }
}
