//! # Adapters Layer
//!
//! Reference implementations of the outbound ports.

pub mod call_data_decorator;
pub mod explorer_records;
pub mod memory_storage;

pub use call_data_decorator::{CallDataDecorator, APPROVE_SELECTOR, TRANSFER_SELECTOR};
pub use explorer_records::JsonRecordSource;
pub use memory_storage::InMemoryTransactionStorage;
