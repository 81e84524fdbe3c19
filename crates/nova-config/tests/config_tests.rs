// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the NOVA configuration system.

use nova_config::diagnostic::ConfigError;
use nova_config::model::NovaConfig;
use nova_config::{load_and_validate_str, load_config_from_str};

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[bot]
name = "nova-test"
log_level = "debug"

[telegram]
bot_token = "123:ABC"
admin_id = 4242
webapp_url = "https://nova.example/app"

[payment]
usdt_wallet = "TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE"

[storage]
data_dir = "/tmp/nova"
messages_file = "msgs.json"
orders_file = "orders.json"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.bot.name, "nova-test");
    assert_eq!(config.bot.log_level, "debug");
    assert_eq!(config.telegram.bot_token.as_deref(), Some("123:ABC"));
    assert_eq!(config.telegram.admin_id, Some(4242));
    assert_eq!(
        config.telegram.webapp_url.as_deref(),
        Some("https://nova.example/app")
    );
    assert_eq!(config.payment.wallet(), "TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE");
    assert_eq!(config.storage.data_dir, "/tmp/nova");
    assert_eq!(config.storage.messages_file, "msgs.json");
    assert_eq!(config.storage.orders_file, "orders.json");
}

#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.bot.name, "nova");
    assert_eq!(config.bot.log_level, "info");
    assert!(config.telegram.bot_token.is_none());
    assert!(config.telegram.admin_id.is_none());
    assert!(config.payment.usdt_wallet.is_none());
    assert_eq!(config.storage.data_dir, "data");
    assert_eq!(config.storage.messages_file, "pending_messages.json");
    assert_eq!(config.storage.orders_file, "pending_orders.json");
}

#[test]
fn unknown_key_gets_suggestion() {
    let toml = "[telegram]\nadmn_id = 5\n";
    let errors = load_and_validate_str(toml).expect_err("unknown key must fail");

    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "admn_id");
            assert_eq!(suggestion.as_deref(), Some("admin_id"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_rejected() {
    let toml = "[anthropic]\napi_key = \"x\"\n";
    assert!(load_and_validate_str(toml).is_err());
}

#[test]
fn wrong_type_is_reported() {
    let toml = "[telegram]\nadmin_id = \"not-a-number\"\n";
    let errors = load_and_validate_str(toml).expect_err("string admin_id must fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. })),
        "got {errors:?}"
    );
}

#[test]
fn validation_errors_surface_through_loader() {
    let toml = r#"
[storage]
messages_file = "same.json"
orders_file = "same.json"
"#;
    let errors = load_and_validate_str(toml).expect_err("duplicate files must fail");
    assert!(errors[0].to_string().contains("different files"));
}

#[test]
fn dotted_override_sets_nested_key() {
    use figment::{Figment, providers::Serialized};

    let config: NovaConfig = Figment::new()
        .merge(Serialized::defaults(NovaConfig::default()))
        .merge(("telegram.bot_token", "xyz-from-env"))
        .extract()
        .expect("should set bot_token via dot notation");

    assert_eq!(config.telegram.bot_token.as_deref(), Some("xyz-from-env"));
}

#[test]
fn config_serializes_to_json() {
    let json = serde_json::to_value(NovaConfig::default()).unwrap();
    assert_eq!(json["storage"]["data_dir"], "data");
    assert!(json["telegram"]["admin_id"].is_null());
}
