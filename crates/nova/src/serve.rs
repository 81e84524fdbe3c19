// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `nova serve` command implementation.
//!
//! Opens the pending-data store, loads the knowledge base, connects the
//! Telegram channel, replays whatever the last run left pending and then
//! runs the bot loop until SIGINT/SIGTERM.

use std::sync::Arc;

use nova_agent::shutdown;
use nova_agent::{BotLoop, BotSettings};
use nova_config::NovaConfig;
use nova_core::{ChannelAdapter, NovaError};
use nova_knowledge::KnowledgeBase;
use nova_storage::PendingStore;
use nova_telegram::TelegramChannel;
use tracing::{info, warn};

pub async fn run_serve(config: NovaConfig) -> Result<(), NovaError> {
    init_tracing(&config.bot.log_level);

    info!(name = %config.bot.name, "starting nova serve");

    if config.telegram.admin_id.is_none() {
        warn!("telegram.admin_id not set; operator notices and recovery are disabled");
    }
    if config.payment.usdt_wallet.is_none() {
        warn!("payment.usdt_wallet not set; invoices will show a placeholder");
    }

    let store = PendingStore::open(&config.storage)?;
    let kb = Arc::new(KnowledgeBase::builtin(config.payment.wallet())?);

    let mut telegram = TelegramChannel::new(&config.telegram)?;
    telegram.connect().await?;
    let channel: Arc<dyn ChannelAdapter> = Arc::new(telegram);

    let bot = BotLoop::new(channel, store, kb, BotSettings::from_config(&config));

    let report = bot.recover().await;
    if report.failed > 0 {
        warn!(
            failed = report.failed,
            "some pending records could not be restored, they stay queued"
        );
    }

    let cancel = shutdown::install_signal_handler();
    bot.run(cancel).await?;

    info!("nova serve shutdown complete");
    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nova={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
