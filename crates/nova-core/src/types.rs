// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel-agnostic event and message types.
//!
//! Channel adapters translate platform updates into [`InboundEvent`]s and
//! render [`OutboundMessage`]s back into platform calls. Nothing in here
//! knows about Telegram.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifier of a message delivered by a channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Channel,
    Storage,
}

/// The user an inbound event came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub id: i64,
    pub username: Option<String>,
    pub full_name: String,
}

impl Sender {
    /// Username for operator notices, `unknown` when the user has none.
    pub fn handle(&self) -> &str {
        self.username.as_deref().unwrap_or("unknown")
    }
}

/// What happened on the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// A `/command`, name without the slash and lower-cased.
    Command { name: String },
    /// Free-form text.
    Text { text: String },
    /// Raw JSON sent by the mini-app.
    StructuredPayload { payload: String },
    /// A message sent as a reply to an earlier message.
    ReplyToMessage { text: String, replied_text: String },
    /// An inline keyboard button press.
    Callback { id: String, data: String },
}

/// An inbound event received from a channel adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    /// Chat to answer in.
    pub chat_id: i64,
    pub from: Sender,
    pub kind: EventKind,
    /// RFC 3339 receive time as reported by the platform.
    pub timestamp: String,
}

/// How the channel should interpret the outbound text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formatting {
    /// `**bold**` and `` `code` `` markup, rendered by the adapter.
    #[default]
    Markdown,
    /// Sent verbatim.
    Plain,
}

/// Keyboards the bot can attach, rendered by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    /// Persistent reply keyboard with the mini-app button and menu entries.
    MainMenu,
    /// Inline keyboard listing product categories.
    Products,
}

/// An outbound message to be sent via a channel adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub chat_id: i64,
    pub text: String,
    pub formatting: Formatting,
    pub keyboard: Option<Keyboard>,
}

impl OutboundMessage {
    pub fn markdown(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            formatting: Formatting::Markdown,
            keyboard: None,
        }
    }

    pub fn plain(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            formatting: Formatting::Plain,
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Capabilities reported by a channel adapter.
#[derive(Debug, Clone)]
pub struct ChannelCapabilities {
    pub supports_keyboards: bool,
    pub supports_web_app: bool,
    pub max_message_length: Option<usize>,
}
