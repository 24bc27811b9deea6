//! # Quantum-Chain Wallet Test Suite
//!
//! Unified test crate for cross-crate flows and benchmarks.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Transaction builders shared by flows and benches
//! ├── benchmarks/       # Criterion routines per subsystem
//! │   ├── qc_18_wallet_transactions.rs
//! │   └── qc_19_les_messages.rs
//! │
//! └── integration/      # Cross-crate flows
//!     ├── wallet_flows.rs      # sync → manager → bus → queries
//!     └── submission_flows.rs  # signed tx → codec → transport
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # By category
//! cargo test -p qc-tests integration::
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```

#![allow(dead_code)]

pub mod benchmarks;
pub mod fixtures;
