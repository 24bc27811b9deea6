//! # Call Data Decorator
//!
//! Classifies transactions from their call data alone. Recognizes ERC-20
//! `transfer(address,uint256)` and `approve(address,uint256)`; any other
//! selector is a generic contract call.
//!
//! ## ABI Layout
//!
//! ```text
//! [selector: 4][address: 12 zero + 20][uint256: 32]
//!  0..4         4..36                  36..68
//! ```

use crate::domain::DecorationError;
use crate::ports::TransactionDecorator;
use async_trait::async_trait;
use shared_types::{Address, Transaction, TransactionDecoration, U256};

/// `transfer(address,uint256)` selector.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// `approve(address,uint256)` selector.
pub const APPROVE_SELECTOR: [u8; 4] = [0x09, 0x5e, 0xa7, 0xb3];

const SELECTOR_LEN: usize = 4;
const WORD_LEN: usize = 32;
const ADDRESS_ARGS_LEN: usize = SELECTOR_LEN + 2 * WORD_LEN;

/// Decorator that decodes call data locally, without chain lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallDataDecorator;

impl CallDataDecorator {
    /// Create a decorator.
    pub fn new() -> Self {
        Self
    }

    /// Synchronous classification.
    ///
    /// # Errors
    /// `MalformedCallData` when the call data is 1 to 3 bytes long.
    pub fn classify(
        &self,
        transaction: &Transaction,
    ) -> Result<TransactionDecoration, DecorationError> {
        let Some(to) = transaction.to else {
            return Ok(TransactionDecoration::ContractCreation);
        };

        let input = &transaction.input;
        if input.is_empty() {
            return Ok(TransactionDecoration::NativeTransfer {
                from: transaction.from,
                to,
                value: transaction.value,
            });
        }
        if input.len() < SELECTOR_LEN {
            return Err(DecorationError::MalformedCallData { len: input.len() });
        }

        let mut method_id = [0u8; SELECTOR_LEN];
        method_id.copy_from_slice(&input[..SELECTOR_LEN]);

        let Some((target, amount)) = decode_address_amount(input) else {
            return Ok(TransactionDecoration::ContractCall {
                contract: to,
                method_id,
            });
        };

        Ok(match method_id {
            TRANSFER_SELECTOR => TransactionDecoration::TokenTransfer {
                contract: to,
                from: transaction.from,
                to: target,
                value: amount,
            },
            APPROVE_SELECTOR => TransactionDecoration::TokenApprove {
                contract: to,
                owner: transaction.from,
                spender: target,
                value: amount,
            },
            _ => TransactionDecoration::ContractCall {
                contract: to,
                method_id,
            },
        })
    }
}

/// Decode `(address, uint256)` arguments, if present and well formed.
fn decode_address_amount(input: &[u8]) -> Option<(Address, U256)> {
    if input.len() < ADDRESS_ARGS_LEN {
        return None;
    }
    let address_word = &input[SELECTOR_LEN..SELECTOR_LEN + WORD_LEN];
    // Upper 12 bytes of an ABI address word are zero.
    if address_word[..12].iter().any(|b| *b != 0) {
        return None;
    }
    let mut address = [0u8; 20];
    address.copy_from_slice(&address_word[12..]);
    let amount = U256::from_big_endian(&input[SELECTOR_LEN + WORD_LEN..ADDRESS_ARGS_LEN]);
    Some((address, amount))
}

#[async_trait]
impl TransactionDecorator for CallDataDecorator {
    async fn decorate(
        &self,
        transaction: &Transaction,
    ) -> Result<TransactionDecoration, DecorationError> {
        self.classify(transaction)
    }
}
