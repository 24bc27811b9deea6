//! # Domain Module
//!
//! RLP encoding and the transaction submission message.

pub mod errors;
pub mod message;
pub mod rlp;

pub use errors::*;
pub use message::*;
pub use rlp::*;
