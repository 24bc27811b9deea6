//! # Shared Types Crate
//!
//! This crate contains the domain entities shared by the wallet transaction
//! pipeline (qc-18), the notification bus and the outgoing message codec
//! (qc-19).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Storage stays free-form**: Tags are plain strings at this layer; their
//!   closed meaning lives in the tag generator.
//! - **Ephemeral vs durable**: `Transaction` and `TransactionTag` are the only
//!   persisted rows. `FullTransaction` and `TransactionWithTags` exist for the
//!   duration of one ingestion call or query.

pub mod decoration;
pub mod entities;
pub mod errors;
pub mod tags;

pub use decoration::*;
pub use entities::*;
pub use errors::*;
pub use tags::*;
