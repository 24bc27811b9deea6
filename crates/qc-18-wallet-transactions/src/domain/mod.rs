//! # Domain Layer
//!
//! Pure pipeline logic: tag generation, nonce reconciliation, explorer
//! record conversion, and errors.

pub mod errors;
pub mod reconciliation;
pub mod records;
pub mod tags;

pub use errors::*;
pub use reconciliation::*;
pub use records::*;
pub use tags::*;
