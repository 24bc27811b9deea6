//! # Ports Layer
//!
//! Inbound API and outbound dependencies of the Transaction Manager.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
