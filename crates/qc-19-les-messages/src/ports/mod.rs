//! # Ports Module
//!
//! Outbound dependency on the network transport.

pub mod outbound;

pub use outbound::*;
