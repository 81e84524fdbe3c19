// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable JSON-file queues for the NOVA sales bot.
//!
//! Pending messages and orders are written to disk before the bot acts on
//! them and flagged processed once handled, so anything interrupted by a
//! crash or restart is found again by the startup recovery pass.

pub mod queue;
pub mod records;
pub mod store;

pub use queue::JsonQueue;
pub use records::{CartItem, PendingMessage, PendingOrder, QueueRecord, Tier};
pub use store::{PendingStore, StoreStatus};
