// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The bot's pair of queues: pending messages and pending orders.

use std::fs;

use async_trait::async_trait;
use nova_config::StorageConfig;
use nova_core::{AdapterType, HealthStatus, NovaError, PluginAdapter};
use tracing::info;

use crate::queue::JsonQueue;
use crate::records::{PendingMessage, PendingOrder};

/// Snapshot reported by the `/status` command and `nova status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStatus {
    pub pending_messages: usize,
    pub pending_orders: usize,
    /// Size of the message queue file in bytes.
    pub messages_file_bytes: u64,
}

/// Owner of both queue files. Build one per process with [`PendingStore::open`].
#[derive(Debug, Clone)]
pub struct PendingStore {
    messages: JsonQueue<PendingMessage>,
    orders: JsonQueue<PendingOrder>,
}

impl PendingStore {
    /// Create the data directory if needed and point both queues into it.
    pub fn open(config: &StorageConfig) -> Result<Self, NovaError> {
        fs::create_dir_all(&config.data_dir).map_err(NovaError::storage)?;
        let store = Self::at(config);
        info!(
            messages = %store.messages.path().display(),
            orders = %store.orders.path().display(),
            "pending store ready"
        );
        Ok(store)
    }

    /// Point at the configured files without touching the filesystem.
    pub fn at(config: &StorageConfig) -> Self {
        Self {
            messages: JsonQueue::new(config.messages_path()),
            orders: JsonQueue::new(config.orders_path()),
        }
    }

    pub fn messages(&self) -> &JsonQueue<PendingMessage> {
        &self.messages
    }

    pub fn orders(&self) -> &JsonQueue<PendingOrder> {
        &self.orders
    }

    pub fn record_message(&self, user_id: i64, username: Option<&str>, text: &str) -> Option<u64> {
        self.messages.append(PendingMessage::new(
            user_id,
            username.map(str::to_string),
            text,
        ))
    }

    pub fn mark_message_processed(&self, id: u64) -> usize {
        self.messages.mark_processed_by_id(id)
    }

    /// Mark record `id` only if it was sent by `user_id`.
    pub fn mark_user_message_processed(&self, user_id: i64, id: u64) -> usize {
        self.messages
            .mark_processed(|m| m.id == id && m.user_id == user_id)
    }

    /// Mark every pending message from `user_id` with exactly `text`.
    pub fn mark_messages_matching(&self, user_id: i64, text: &str) -> usize {
        self.messages
            .mark_processed(|m| m.user_id == user_id && m.text == text)
    }

    pub fn record_order(&self, order: PendingOrder) -> Option<u64> {
        self.orders.append(order)
    }

    pub fn mark_order_processed(&self, id: u64) -> usize {
        self.orders.mark_processed_by_id(id)
    }

    pub fn pending_messages(&self) -> Vec<PendingMessage> {
        self.messages.scan_pending()
    }

    pub fn pending_orders(&self) -> Vec<PendingOrder> {
        self.orders.scan_pending()
    }

    pub fn status(&self) -> StoreStatus {
        StoreStatus {
            pending_messages: self.messages.count_pending(),
            pending_orders: self.orders.count_pending(),
            messages_file_bytes: self.messages.file_size(),
        }
    }
}

#[async_trait]
impl PluginAdapter for PendingStore {
    fn name(&self) -> &str {
        "json-file"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    /// Unhealthy when either queue file exists but cannot be parsed.
    async fn health_check(&self) -> Result<HealthStatus, NovaError> {
        let broken: Vec<String> = [
            self.messages.try_scan_pending().err(),
            self.orders.try_scan_pending().err(),
        ]
        .into_iter()
        .flatten()
        .map(|e| e.to_string())
        .collect();

        Ok(if broken.is_empty() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy(broken.join("; "))
        })
    }

    async fn shutdown(&self) -> Result<(), NovaError> {
        Ok(())
    }
}
