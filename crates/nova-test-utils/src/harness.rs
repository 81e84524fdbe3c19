// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end tests.
//!
//! `TestHarness` wires a real [`BotLoop`] to a [`MockChannel`], the bundled
//! knowledge base and a [`PendingStore`] in a temp directory.

use std::sync::Arc;

use nova_agent::{BotLoop, BotSettings};
use nova_config::{NovaConfig, StorageConfig};
use nova_core::{InboundEvent, NovaError, OutboundMessage};
use nova_knowledge::KnowledgeBase;
use nova_storage::PendingStore;

use crate::mock_channel::MockChannel;

/// Admin chat id used when the builder is not told otherwise.
pub const TEST_ADMIN_ID: i64 = 900_000_001;

/// Wallet printed by the harness bot.
pub const TEST_WALLET: &str = "TTestWallet000000000000000000000000";

/// Builder for test environments.
pub struct TestHarnessBuilder {
    admin_id: Option<i64>,
    wallet: String,
    data_dir: Option<tempfile::TempDir>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            admin_id: Some(TEST_ADMIN_ID),
            wallet: TEST_WALLET.to_string(),
            data_dir: None,
        }
    }

    /// Run without an operator.
    pub fn without_admin(mut self) -> Self {
        self.admin_id = None;
        self
    }

    pub fn with_admin(mut self, admin_id: i64) -> Self {
        self.admin_id = Some(admin_id);
        self
    }

    pub fn with_wallet(mut self, wallet: &str) -> Self {
        self.wallet = wallet.to_string();
        self
    }

    /// Reuse a data directory, e.g. one left behind by a previous harness.
    pub fn with_data_dir(mut self, dir: tempfile::TempDir) -> Self {
        self.data_dir = Some(dir);
        self
    }

    pub fn build(self) -> Result<TestHarness, NovaError> {
        let temp_dir = match self.data_dir {
            Some(dir) => dir,
            None => tempfile::TempDir::new().map_err(NovaError::storage)?,
        };

        let mut config = NovaConfig {
            storage: StorageConfig {
                data_dir: temp_dir.path().display().to_string(),
                ..StorageConfig::default()
            },
            ..NovaConfig::default()
        };
        config.telegram.admin_id = self.admin_id;
        config.payment.usdt_wallet = Some(self.wallet);

        let store = PendingStore::open(&config.storage)?;
        let kb = Arc::new(KnowledgeBase::builtin(config.payment.wallet())?);
        let channel = Arc::new(MockChannel::new());
        let bot = BotLoop::new(
            channel.clone(),
            store.clone(),
            kb,
            BotSettings::from_config(&config),
        );

        Ok(TestHarness {
            bot,
            channel,
            store,
            config,
            temp_dir,
        })
    }
}

/// A complete bot with a mock channel and temp storage.
pub struct TestHarness {
    pub bot: BotLoop,
    pub channel: Arc<MockChannel>,
    /// Same files as the bot's store.
    pub store: PendingStore,
    pub config: NovaConfig,
    temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    pub fn admin_id(&self) -> Option<i64> {
        self.config.telegram.admin_id
    }

    /// Handle one event through the full pipeline.
    pub async fn dispatch(&self, event: InboundEvent) -> Result<(), NovaError> {
        self.bot.handle_event(event).await
    }

    /// Messages the bot sent to `chat_id`.
    pub async fn sent_to(&self, chat_id: i64) -> Vec<OutboundMessage> {
        self.channel.sent_to(chat_id).await
    }

    /// Messages the bot sent to the admin.
    pub async fn admin_notices(&self) -> Vec<OutboundMessage> {
        match self.admin_id() {
            Some(admin) => self.channel.sent_to(admin).await,
            None => Vec::new(),
        }
    }

    /// Drop the bot and hand back its data directory, to simulate a restart.
    pub fn into_data_dir(self) -> tempfile::TempDir {
        self.temp_dir
    }
}
