//! # Quantum-Chain Wallet Benchmarks
//!
//! | Subsystem | Operation |
//! |-----------|-----------|
//! | qc-18 Wallet Transactions | `handle` per batch size |
//! | qc-19 Light Client Messages | `SendTxV2` encoding |

use criterion::{criterion_group, criterion_main};
use qc_tests::benchmarks::{qc_18_wallet_transactions, qc_19_les_messages};

criterion_group!(
    benches,
    qc_18_wallet_transactions::bench_ingestion,
    qc_19_les_messages::bench_send_transaction_encoding,
);

criterion_main!(benches);
