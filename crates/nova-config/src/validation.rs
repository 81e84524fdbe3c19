// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::NovaConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// All failures are collected rather than stopping at the first one.
pub fn validate_config(config: &NovaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.bot.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "bot.log_level `{}` is not one of {}",
            config.bot.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    if let Some(admin_id) = config.telegram.admin_id
        && admin_id <= 0
    {
        errors.push(ConfigError::validation(format!(
            "telegram.admin_id must be a positive user id, got {admin_id}"
        )));
    }

    if let Some(url) = config.telegram.webapp_url.as_deref()
        && !url.starts_with("https://")
    {
        errors.push(ConfigError::validation(format!(
            "telegram.webapp_url must be an https:// URL, got `{url}`"
        )));
    }

    let storage = &config.storage;
    if storage.data_dir.trim().is_empty() {
        errors.push(ConfigError::validation("storage.data_dir must not be empty"));
    }
    for (key, value) in [
        ("storage.messages_file", &storage.messages_file),
        ("storage.orders_file", &storage.orders_file),
    ] {
        if value.trim().is_empty() {
            errors.push(ConfigError::validation(format!("{key} must not be empty")));
        } else if value.contains(['/', '\\']) {
            errors.push(ConfigError::validation(format!(
                "{key} must be a file name inside storage.data_dir, got `{value}`"
            )));
        }
    }
    if !storage.messages_file.trim().is_empty() && storage.messages_file == storage.orders_file {
        errors.push(ConfigError::validation(
            "storage.messages_file and storage.orders_file must name different files",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&NovaConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_failure() {
        let mut config = NovaConfig::default();
        config.bot.log_level = "loud".into();
        config.telegram.admin_id = Some(-5);
        config.storage.orders_file = config.storage.messages_file.clone();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_plain_http_webapp() {
        let mut config = NovaConfig::default();
        config.telegram.webapp_url = Some("http://example.com/app".into());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("webapp_url"));
    }

    #[test]
    fn rejects_nested_queue_file() {
        let mut config = NovaConfig::default();
        config.storage.messages_file = "../escape.json".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = NovaConfig::default();
        config.bot.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
