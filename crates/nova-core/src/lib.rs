// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the NOVA sales bot.
//!
//! Foundational trait definitions, the shared error type, and the
//! channel-agnostic event types used throughout the workspace.

pub mod error;
pub mod traits;
pub mod types;

pub use error::NovaError;
pub use types::{
    AdapterType, EventKind, Formatting, HealthStatus, InboundEvent, Keyboard, MessageId,
    OutboundMessage, Sender,
};

pub use traits::{ChannelAdapter, PluginAdapter};
