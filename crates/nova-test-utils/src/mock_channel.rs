// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock channel adapter for deterministic testing.
//!
//! `MockChannel` implements `ChannelAdapter` with injectable inbound events,
//! captured outbound messages and per-chat send failures.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use nova_core::types::ChannelCapabilities;
use nova_core::{
    AdapterType, ChannelAdapter, HealthStatus, InboundEvent, MessageId, NovaError,
    OutboundMessage, PluginAdapter,
};

/// Same limit as the Telegram Bot API.
pub const MOCK_MAX_MESSAGE_LENGTH: usize = 4096;

/// A mock messaging channel for testing.
///
/// - **inbound**: events injected via [`inject_event`](Self::inject_event) are
///   returned by `receive()` in order
/// - **sent**: messages accepted by `send()` are captured for assertions
/// - **failing chats**: `send()` to these chat ids returns a channel error
/// - **length limit**: text longer than [`MOCK_MAX_MESSAGE_LENGTH`] characters
///   is refused, as Telegram does
#[derive(Clone, Default)]
pub struct MockChannel {
    inbound: Arc<Mutex<VecDeque<InboundEvent>>>,
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    answered: Arc<Mutex<Vec<String>>>,
    failing: Arc<Mutex<HashSet<i64>>>,
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next `receive()`.
    pub async fn inject_event(&self, event: InboundEvent) {
        self.inbound.lock().await.push_back(event);
        self.notify.notify_one();
    }

    /// Make `receive()` report a closed channel once the queue is drained.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.notify.notify_one();
    }

    /// Fail every subsequent send to `chat_id`.
    pub async fn fail_sends_to(&self, chat_id: i64) {
        self.failing.lock().await.insert(chat_id);
    }

    pub async fn restore_sends_to(&self, chat_id: i64) {
        self.failing.lock().await.remove(&chat_id);
    }

    pub async fn sent_messages(&self) -> Vec<OutboundMessage> {
        self.sent.lock().await.clone()
    }

    /// Messages sent to one chat, in order.
    pub async fn sent_to(&self, chat_id: i64) -> Vec<OutboundMessage> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    pub async fn clear_sent(&self) {
        self.sent.lock().await.clear();
    }

    /// Callback ids acknowledged through `answer_callback()`.
    pub async fn answered_callbacks(&self) -> Vec<String> {
        self.answered.lock().await.clone()
    }
}

#[async_trait]
impl PluginAdapter for MockChannel {
    fn name(&self) -> &str {
        "mock-channel"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Channel
    }

    async fn health_check(&self) -> Result<HealthStatus, NovaError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), NovaError> {
        Ok(())
    }
}

#[async_trait]
impl ChannelAdapter for MockChannel {
    fn capabilities(&self) -> ChannelCapabilities {
        ChannelCapabilities {
            supports_keyboards: true,
            supports_web_app: true,
            max_message_length: Some(MOCK_MAX_MESSAGE_LENGTH),
        }
    }

    async fn connect(&mut self) -> Result<(), NovaError> {
        Ok(())
    }

    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, NovaError> {
        if self.failing.lock().await.contains(&msg.chat_id) {
            return Err(NovaError::channel(format!(
                "mock delivery to chat {} refused",
                msg.chat_id
            )));
        }
        let length = msg.text.chars().count();
        if length > MOCK_MAX_MESSAGE_LENGTH {
            return Err(NovaError::channel(format!(
                "message is too long ({length} characters)"
            )));
        }
        self.sent.lock().await.push(msg);
        Ok(MessageId(format!("mock-msg-{}", uuid::Uuid::new_v4())))
    }

    async fn receive(&self) -> Result<InboundEvent, NovaError> {
        loop {
            {
                let mut queue = self.inbound.lock().await;
                if let Some(event) = queue.pop_front() {
                    return Ok(event);
                }
                if self.closed.load(Ordering::SeqCst) {
                    return Err(NovaError::channel("mock channel closed"));
                }
            }
            self.notify.notified().await;
        }
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), NovaError> {
        self.answered.lock().await.push(callback_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events;

    #[tokio::test]
    async fn inject_and_receive_in_order() {
        let channel = MockChannel::new();
        channel.inject_event(events::text(1, "first")).await;
        channel.inject_event(events::text(1, "second")).await;

        assert_eq!(channel.receive().await.unwrap(), events::text(1, "first"));
        assert_eq!(channel.receive().await.unwrap(), events::text(1, "second"));
    }

    #[tokio::test]
    async fn send_captures_and_filters_by_chat() {
        let channel = MockChannel::new();
        channel.send(OutboundMessage::plain(1, "a")).await.unwrap();
        channel.send(OutboundMessage::plain(2, "b")).await.unwrap();

        assert_eq!(channel.sent_count().await, 2);
        let to_two = channel.sent_to(2).await;
        assert_eq!(to_two.len(), 1);
        assert_eq!(to_two[0].text, "b");
    }

    #[tokio::test]
    async fn failing_chat_refuses_sends() {
        let channel = MockChannel::new();
        channel.fail_sends_to(9).await;
        assert!(channel.send(OutboundMessage::plain(9, "x")).await.is_err());
        channel.restore_sends_to(9).await;
        assert!(channel.send(OutboundMessage::plain(9, "x")).await.is_ok());
    }

    #[tokio::test]
    async fn oversized_text_is_refused() {
        let channel = MockChannel::new();
        let limit = "x".repeat(MOCK_MAX_MESSAGE_LENGTH);
        assert!(channel.send(OutboundMessage::plain(1, limit.clone())).await.is_ok());
        let over = format!("{limit}x");
        assert!(channel.send(OutboundMessage::plain(1, over)).await.is_err());
        assert_eq!(channel.sent_count().await, 1);
    }

    #[tokio::test]
    async fn closed_channel_reports_closed() {
        let channel = MockChannel::new();
        channel.close();
        let err = channel.receive().await.unwrap_err();
        assert!(err.is_channel_closed());
    }

    #[tokio::test]
    async fn receive_waits_for_injection() {
        let channel = MockChannel::new();
        let producer = channel.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            producer.inject_event(events::command(3, "start")).await;
        });

        let event = channel.receive().await.unwrap();
        assert_eq!(event.from.id, 3);
        handle.await.unwrap();
    }
}
