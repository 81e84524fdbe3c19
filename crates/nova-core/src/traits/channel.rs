// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel adapter trait: the notification relay between the bot and a
//! messaging platform.

use async_trait::async_trait;

use crate::error::NovaError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{ChannelCapabilities, InboundEvent, MessageId, OutboundMessage};

/// Adapter for bidirectional messaging channel integrations.
///
/// Delivers user replies and operator notifications, and yields the inbound
/// event stream one event at a time.
#[async_trait]
pub trait ChannelAdapter: PluginAdapter {
    /// Returns the capabilities supported by this channel.
    fn capabilities(&self) -> ChannelCapabilities;

    /// Establishes a connection to the messaging platform.
    async fn connect(&mut self) -> Result<(), NovaError>;

    /// Sends a message through the channel.
    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, NovaError>;

    /// Receives the next inbound event from the channel.
    async fn receive(&self) -> Result<InboundEvent, NovaError>;

    /// Acknowledges an inline button press so the client stops its spinner.
    async fn answer_callback(&self, callback_id: &str) -> Result<(), NovaError>;
}
