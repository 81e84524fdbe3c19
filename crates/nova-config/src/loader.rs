// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./nova.toml` > `~/.config/nova/nova.toml` > `/etc/nova/nova.toml`
//! with environment variable overrides via the `NOVA_` prefix. The bare
//! variables of legacy deployments (`TOKEN`, `ADMIN_ID`, `USDT_WALLET`,
//! `WEBAPP_URL`) are honoured below the prefixed ones.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::NovaConfig;

/// Config sections addressable through `NOVA_<SECTION>_<KEY>`.
const SECTIONS: &[&str] = &["bot", "telegram", "payment", "storage"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/nova/nova.toml` (system-wide)
/// 3. `~/.config/nova/nova.toml` (user XDG config)
/// 4. `./nova.toml` (local directory)
/// 5. Legacy bare variables (`TOKEN`, `ADMIN_ID`, ...)
/// 6. `NOVA_*` environment variables
pub fn load_config() -> Result<NovaConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<NovaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NovaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NovaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NovaConfig::default()))
        .merge(Toml::file(path))
        .merge(legacy_env_provider())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(NovaConfig::default()))
        .merge(Toml::file("/etc/nova/nova.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("nova/nova.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("nova.toml"))
        .merge(legacy_env_provider())
        .merge(env_provider())
}

/// Maps `NOVA_TELEGRAM_BOT_TOKEN` to `telegram.bot_token`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// keys that contain underscores themselves stay intact.
fn env_provider() -> Env {
    Env::prefixed("NOVA_").map(|key| section_key(key.as_str()).into())
}

fn section_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|r| r.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}

/// Bare variables read by legacy `.env` deployments.
fn legacy_env_provider() -> Env {
    Env::raw()
        .only(&["TOKEN", "ADMIN_ID", "USDT_WALLET", "WEBAPP_URL"])
        .map(|key| legacy_key(key.as_str()).into())
}

fn legacy_key(key: &str) -> String {
    match key.to_ascii_lowercase().as_str() {
        "token" => "telegram.bot_token".to_string(),
        "admin_id" => "telegram.admin_id".to_string(),
        "usdt_wallet" => "payment.usdt_wallet".to_string(),
        "webapp_url" => "telegram.webapp_url".to_string(),
        other => other.to_string(),
    }
}
