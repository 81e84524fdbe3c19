// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `nova check-config`: print the effective configuration.

use nova_config::NovaConfig;

/// Key/value lines of the summary. The bot token is never printed.
pub fn summary_lines(config: &NovaConfig) -> Vec<(&'static str, String)> {
    let set_or_missing = |set: bool| String::from(if set { "set" } else { "missing" });

    vec![
        ("bot.name", config.bot.name.clone()),
        ("bot.log_level", config.bot.log_level.clone()),
        (
            "telegram.bot_token",
            set_or_missing(config.telegram.bot_token.is_some()),
        ),
        (
            "telegram.admin_id",
            config
                .telegram
                .admin_id
                .map_or_else(|| "not set".to_string(), |id| id.to_string()),
        ),
        (
            "telegram.webapp_url",
            config
                .telegram
                .webapp_url
                .clone()
                .unwrap_or_else(|| "not set".to_string()),
        ),
        ("payment.usdt_wallet", config.payment.wallet().to_string()),
        (
            "storage.messages",
            config.storage.messages_path().display().to_string(),
        ),
        (
            "storage.orders",
            config.storage.orders_path().display().to_string(),
        ),
    ]
}

pub fn print_summary(config: &NovaConfig) {
    println!("nova: configuration is valid");
    for (key, value) in summary_lines(config) {
        println!("  {key:<22} {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(lines: &'a [(&'static str, String)], key: &str) -> &'a str {
        lines
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn token_is_masked() {
        let mut config = NovaConfig::default();
        config.telegram.bot_token = Some("123:secret".into());
        let lines = summary_lines(&config);
        assert_eq!(value(&lines, "telegram.bot_token"), "set");
        assert!(lines.iter().all(|(_, v)| !v.contains("secret")));
    }

    #[test]
    fn defaults_are_reported() {
        let lines = summary_lines(&NovaConfig::default());
        assert_eq!(value(&lines, "bot.name"), "nova");
        assert_eq!(value(&lines, "telegram.bot_token"), "missing");
        assert_eq!(value(&lines, "telegram.admin_id"), "not set");
        assert_eq!(value(&lines, "payment.usdt_wallet"), "wallet not configured");
        assert!(value(&lines, "storage.messages").ends_with("pending_messages.json"));
    }
}
