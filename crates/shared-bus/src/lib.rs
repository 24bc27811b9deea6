//! # Shared Bus - Notification Channels for Transaction Batches
//!
//! In-process publish/subscribe feeds fed by the transaction manager after
//! every ingestion call.
//!
//! ## Channels
//!
//! ```text
//!                     publish(tagged batch)
//! ┌──────────────┐ ─────────┐
//! │ Transaction  │          ▼
//! │   Manager    │   ┌──────────────┐  every batch, in full     ┌────────────┐
//! └──────────────┘   │ Transaction  │ ────────────────────────→ │ subscriber │
//!                    │     Bus      │                           └────────────┘
//!                    │              │  matching subset only     ┌────────────┐
//!                    │              │ ────────────────────────→ │ subscriber │
//!                    └──────────────┘  (empty subsets skipped)  └────────────┘
//! ```
//!
//! ## Backpressure Policy
//!
//! - **Unfiltered feed:** unbounded buffering; no batch is dropped for being
//!   empty or for slow consumption.
//! - **Filtered feed:** filter first, then drop the delivery if nothing
//!   matched; deliveries that do happen are buffered without bound.
//! - Publishing never blocks; closed subscriptions are pruned on publish.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{PublishReport, TransactionBatch};
pub use publisher::{BatchPublisher, InMemoryTransactionBus};
pub use subscriber::{BatchStream, Subscription, SubscriptionError};
