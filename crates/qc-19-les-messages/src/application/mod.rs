//! # Application Module
//!
//! Hands encoded submissions to the transport.

pub mod sender;

pub use sender::TransactionSender;
