//! # Application Layer
//!
//! The Transaction Manager service.

pub mod service;

pub use service::TransactionManager;
