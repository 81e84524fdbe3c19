// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event loop for the NOVA sales bot.
//!
//! [`BotLoop`] pulls one [`InboundEvent`] at a time from a channel adapter
//! and handles it to completion before taking the next:
//! - free text is queued, classified and answered from the knowledge base
//! - menu buttons, commands and inline callbacks get static pages
//! - mini-app payloads produce invoices and operator notices
//! - operator replies are forwarded to the user they answer
//!
//! Before the loop starts, [`BotLoop::recover`] replays whatever the
//! previous run left pending.

pub mod correlation;
mod handlers;
pub mod payload;
pub mod recovery;
pub mod shutdown;
pub mod templates;

use std::sync::Arc;

use nova_config::NovaConfig;
use nova_core::{ChannelAdapter, InboundEvent, NovaError, OutboundMessage};
use nova_knowledge::{IntentClassifier, KnowledgeBase};
use nova_storage::PendingStore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

pub use recovery::RecoveryReport;

/// Runtime settings the handlers need from the configuration.
#[derive(Debug, Clone)]
pub struct BotSettings {
    /// Operator chat; `None` disables notices and admin commands.
    pub admin_id: Option<i64>,
    pub wallet: String,
}

impl BotSettings {
    pub fn from_config(config: &NovaConfig) -> Self {
        Self {
            admin_id: config.telegram.admin_id,
            wallet: config.payment.wallet().to_string(),
        }
    }
}

/// The bot's event loop.
pub struct BotLoop {
    channel: Arc<dyn ChannelAdapter>,
    store: PendingStore,
    classifier: IntentClassifier,
    settings: BotSettings,
}

impl BotLoop {
    pub fn new(
        channel: Arc<dyn ChannelAdapter>,
        store: PendingStore,
        kb: Arc<KnowledgeBase>,
        settings: BotSettings,
    ) -> Self {
        info!(
            channel = channel.name(),
            admin = settings.admin_id.is_some(),
            intents = kb.intents().len(),
            "bot loop initialized"
        );
        Self {
            channel,
            store,
            classifier: IntentClassifier::new(kb),
            settings,
        }
    }

    pub fn store(&self) -> &PendingStore {
        &self.store
    }

    /// Replay pending records to the admin, then announce the restart.
    pub async fn recover(&self) -> RecoveryReport {
        let report =
            recovery::restore_pending(self.channel.as_ref(), &self.store, self.settings.admin_id)
                .await;
        if !report.skipped {
            self.notify_admin(templates::RESTART_NOTICE).await;
        }
        report
    }

    /// Run until `cancel` fires or the channel closes.
    pub async fn run(&self, cancel: CancellationToken) -> Result<(), NovaError> {
        info!("bot loop running");

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("shutdown signal received, stopping bot loop");
                    break;
                }
                event = self.channel.receive() => match event {
                    Ok(event) => {
                        if let Err(e) = self.handle_event(event).await {
                            error!(error = %e, "failed to handle inbound event");
                        }
                    }
                    Err(e) if e.is_channel_closed() => {
                        warn!(error = %e, "channel closed, stopping bot loop");
                        break;
                    }
                    Err(e) => error!(error = %e, "channel receive error"),
                },
            }
        }

        self.channel.shutdown().await?;
        info!("bot loop stopped");
        Ok(())
    }

    fn is_admin(&self, user_id: i64) -> bool {
        self.settings.admin_id == Some(user_id)
    }

    async fn reply(&self, msg: OutboundMessage) -> Result<(), NovaError> {
        self.channel.send(msg).await.map(|_| ())
    }

    /// Send a notice to the admin. Returns whether it was delivered.
    async fn notify_admin(&self, text: impl Into<String>) -> bool {
        let Some(admin_id) = self.settings.admin_id else {
            debug!("no admin configured, notice dropped");
            return false;
        };
        match self
            .channel
            .send(OutboundMessage::markdown(admin_id, text))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "failed to notify admin");
                false
            }
        }
    }

    /// Handle a single event. Errors are reported to the caller; the loop
    /// logs them and moves on.
    pub async fn handle_event(&self, event: InboundEvent) -> Result<(), NovaError> {
        debug!(chat_id = event.chat_id, user_id = event.from.id, "handling event");
        handlers::dispatch(self, event).await
    }
}
