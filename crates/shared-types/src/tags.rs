//! # Transaction Tags
//!
//! Free-form tag rows and the AND-of-OR tag filter used by queries and the
//! filtered notification channel.

use crate::entities::Hash;
use serde::{Deserialize, Serialize};

/// A persisted `(name, transaction_hash)` tag row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionTag {
    /// Tag name (e.g. `incoming`, `tokenTransfer_0x…`).
    pub name: String,
    /// Tagged transaction.
    pub transaction_hash: Hash,
}

impl TransactionTag {
    /// Create a tag row.
    pub fn new(name: impl Into<String>, transaction_hash: Hash) -> Self {
        Self {
            name: name.into(),
            transaction_hash,
        }
    }
}

/// Tag filter expression.
///
/// The outer list is an AND of groups, each inner group is an OR of tag
/// names. An empty outer list matches everything; an empty inner group
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    groups: Vec<Vec<String>>,
}

impl TagFilter {
    /// Filter that matches every transaction.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from AND-of-OR groups.
    pub fn new<G, T>(groups: G) -> Self
    where
        G: IntoIterator,
        G::Item: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            groups: groups
                .into_iter()
                .map(|group| group.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// True when the filter places no constraint.
    pub fn is_unfiltered(&self) -> bool {
        self.groups.is_empty()
    }

    /// The AND-of-OR groups.
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Evaluate the filter against a transaction's tag names.
    pub fn matches<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        self.groups.iter().all(|group| {
            group
                .iter()
                .any(|wanted| tags.iter().any(|tag| tag.as_ref() == wanted))
        })
    }
}
