//! # Quantum-Chain Wallet Benchmarks
//!
//! Criterion routines per subsystem, registered by
//! `benches/wallet_benchmarks.rs`.

pub mod qc_18_wallet_transactions;
