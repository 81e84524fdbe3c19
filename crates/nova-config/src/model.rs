// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level bot configuration.
///
/// Every section is optional and defaults to values that let the bot start
/// against a local `data/` directory.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NovaConfig {
    /// Bot identity and logging.
    #[serde(default)]
    pub bot: BotConfig,

    /// Telegram bot integration settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Payment details shown on invoices.
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Pending message / order queue files.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Bot identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Display name used in logs.
    #[serde(default = "default_bot_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_bot_name() -> String {
    "nova".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Telegram bot integration configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Telegram Bot API token. Required by `nova serve`.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Chat id of the operator who receives notifications and may use
    /// admin commands. `None` disables every operator notification.
    #[serde(default)]
    pub admin_id: Option<i64>,

    /// URL of the mini-app opened from the main keyboard.
    #[serde(default)]
    pub webapp_url: Option<String>,
}

/// Payment details.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentConfig {
    /// USDT (TRC20) wallet printed on invoices and payment pages.
    #[serde(default)]
    pub usdt_wallet: Option<String>,
}

impl PaymentConfig {
    /// The wallet to print, or a visible placeholder when unset.
    pub fn wallet(&self) -> &str {
        self.usdt_wallet
            .as_deref()
            .filter(|w| !w.trim().is_empty())
            .unwrap_or("wallet not configured")
    }
}

/// Queue file configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding both queue files. Created on startup.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// File name of the pending message queue inside `data_dir`.
    #[serde(default = "default_messages_file")]
    pub messages_file: String,

    /// File name of the pending order queue inside `data_dir`.
    #[serde(default = "default_orders_file")]
    pub orders_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            messages_file: default_messages_file(),
            orders_file: default_orders_file(),
        }
    }
}

impl StorageConfig {
    pub fn messages_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.messages_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.orders_file)
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_messages_file() -> String {
    "pending_messages.json".to_string()
}

fn default_orders_file() -> String {
    "pending_orders.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_paths_join_data_dir() {
        let storage = StorageConfig::default();
        assert_eq!(
            storage.messages_path(),
            PathBuf::from("data").join("pending_messages.json")
        );
        assert_eq!(
            storage.orders_path(),
            PathBuf::from("data").join("pending_orders.json")
        );
    }

    #[test]
    fn wallet_placeholder_when_blank() {
        let mut payment = PaymentConfig::default();
        assert_eq!(payment.wallet(), "wallet not configured");

        payment.usdt_wallet = Some("  ".into());
        assert_eq!(payment.wallet(), "wallet not configured");

        payment.usdt_wallet = Some("TXyz".into());
        assert_eq!(payment.wallet(), "TXyz");
    }
}
