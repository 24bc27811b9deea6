//! # Test Fixtures
//!
//! Deterministic transaction builders. Hashes are derived from a counter so
//! that fixtures never collide across a test.

use std::sync::Arc;

use qc_18_wallet_transactions::{
    CallDataDecorator, InMemoryTransactionStorage, TransactionManager, WalletTransactionsConfig,
    TRANSFER_SELECTOR,
};
use quantum_telemetry::{init_logging, TelemetryConfig, TelemetryError};
use shared_types::{Address, Hash, RawTransaction, Signature, Transaction, U256};

/// The wallet under test.
pub const WALLET: Address = [0xaa; 20];
/// A counterparty account.
pub const PEER: Address = [0xbb; 20];
/// A token contract.
pub const TOKEN: Address = [0xcc; 20];

/// Install the workspace log subscriber for a flow.
///
/// Reads `QC_LOG_LEVEL`/`RUST_LOG` like a deployed node, defaulting to
/// `warn` so test output stays quiet. Safe to call from every test.
pub fn init_test_logging() {
    let config = TelemetryConfig::from_lookup(|key| match key {
        "QC_LOG_LEVEL" | "RUST_LOG" => std::env::var(key).ok().or_else(|| Some("warn".into())),
        "QC_SERVICE_NAME" => Some("qc-tests".into()),
        _ => std::env::var(key).ok(),
    });
    match init_logging(&config) {
        Ok(()) | Err(TelemetryError::AlreadyInitialized(_)) => {}
        Err(e) => panic!("invalid test log configuration: {e}"),
    }
}

/// Manager type used by the flows.
pub type TestManager = TransactionManager<InMemoryTransactionStorage, CallDataDecorator>;

/// Build a manager over fresh in-memory storage.
pub fn manager() -> TestManager {
    TransactionManager::new(
        WalletTransactionsConfig::for_testing().with_wallet(WALLET),
        Arc::new(InMemoryTransactionStorage::new()),
        CallDataDecorator::new(),
    )
}

/// Hash whose bytes are all `id`, disambiguated by `n` in the last 8 bytes.
pub fn hash(id: u8, n: u64) -> Hash {
    let mut hash = [id; 32];
    hash[24..].copy_from_slice(&n.to_be_bytes());
    hash
}

/// Pending native transfer sent by the wallet.
pub fn outgoing(id: u8, nonce: u64) -> Transaction {
    let mut tx = Transaction::pending(hash(id, nonce), WALLET, Some(PEER), nonce);
    tx.value = U256::from(1_000u64);
    tx
}

/// Pending native transfer received by the wallet.
pub fn incoming(id: u8, nonce: u64) -> Transaction {
    let mut tx = Transaction::pending(hash(id, nonce), PEER, Some(WALLET), nonce);
    tx.value = U256::from(2_000u64);
    tx
}

/// ERC-20 transfer call data.
pub fn transfer_call(recipient: Address, amount: u64) -> Vec<u8> {
    let mut data = TRANSFER_SELECTOR.to_vec();
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(&recipient);
    let mut word = [0u8; 32];
    U256::from(amount).to_big_endian(&mut word);
    data.extend_from_slice(&word);
    data
}

/// Pending token transfer from `from` to `to` on [`TOKEN`].
pub fn token_transfer(id: u8, nonce: u64, from: Address, to: Address) -> Transaction {
    let mut tx = Transaction::pending(hash(id, nonce), from, Some(TOKEN), nonce);
    tx.input = transfer_call(to, 50);
    tx
}

/// A simple transfer body for the codec.
pub fn raw_transfer(nonce: u64) -> RawTransaction {
    RawTransaction {
        nonce,
        gas_price: U256::from(20_000_000_000u64),
        gas_limit: 21_000,
        to: Some(PEER),
        value: U256::exp10(17),
        data: Vec::new(),
    }
}

/// A 65-byte style signature with full-width components.
pub fn signature() -> Signature {
    Signature {
        v: 27,
        r: vec![0x5a; 32],
        s: vec![0x3c; 32],
    }
}
