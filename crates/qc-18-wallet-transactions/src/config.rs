//! # Wallet Transactions Configuration
//!
//! Configuration for the Transaction Manager.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Default number of transactions per history page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound on a requested history page.
pub const MAX_PAGE_SIZE: usize = 100;

/// Transaction Manager configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTransactionsConfig {
    /// The account this wallet tracks. Drives `incoming`/`outgoing` tags.
    pub wallet_address: Address,

    /// Page size used when a history query names no limit.
    pub default_page_size: usize,

    /// Requested limits are capped at this value.
    pub max_page_size: usize,
}

impl Default for WalletTransactionsConfig {
    fn default() -> Self {
        Self {
            wallet_address: [0u8; 20],
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl WalletTransactionsConfig {
    /// Create a config for testing (small pages).
    pub fn for_testing() -> Self {
        Self {
            wallet_address: [0xaa; 20],
            default_page_size: 5,
            max_page_size: 10,
        }
    }

    /// Set the tracked wallet address.
    #[must_use]
    pub fn with_wallet(mut self, wallet_address: Address) -> Self {
        self.wallet_address = wallet_address;
        self
    }

    /// Effective page size for a requested limit.
    pub fn page_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}
