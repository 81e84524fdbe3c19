// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The static, ordered knowledge base.
//!
//! Entries are kept in file order: the classifier breaks score ties in favour
//! of the earlier intent, so the order is part of the behaviour.

use std::collections::HashSet;

use nova_core::NovaError;
use serde::Deserialize;

use crate::language::Language;
use crate::select::pick_variant;

/// Knowledge base shipped with the bot.
const BUILTIN_JSON: &str = include_str!("../data/knowledge.json");

/// Placeholder replaced with the configured payment wallet.
const WALLET_PLACEHOLDER: &str = "{wallet}";

/// A value per supported language. Missing Russian data falls back to English.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerLanguage<T> {
    pub en: T,
    #[serde(default)]
    pub ru: Option<T>,
}

impl<T> PerLanguage<Vec<T>> {
    /// The list for `language`, or the English list when that one is absent
    /// or empty.
    pub fn get(&self, language: Language) -> &[T] {
        match (language, self.ru.as_deref()) {
            (Language::Ru, Some(ru)) if !ru.is_empty() => ru,
            _ => &self.en,
        }
    }
}

/// One intent with its trigger keywords and canned responses.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentEntry {
    pub intent: String,
    pub keywords: PerLanguage<Vec<String>>,
    pub responses: PerLanguage<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawKnowledgeBase {
    intents: Vec<IntentEntry>,
    fallbacks: PerLanguage<Vec<String>>,
}

/// Immutable, ordered set of intents plus the "no intent" fallbacks.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    intents: Vec<IntentEntry>,
    fallbacks: PerLanguage<Vec<String>>,
}

impl KnowledgeBase {
    /// The knowledge base bundled with the crate, with `wallet` substituted
    /// into the payment copy.
    pub fn builtin(wallet: &str) -> Result<Self, NovaError> {
        Self::from_json(BUILTIN_JSON, wallet)
    }

    /// Parse and check a knowledge base document.
    ///
    /// Rejects duplicate intents, intents without an English response and an
    /// empty English fallback list.
    pub fn from_json(json: &str, wallet: &str) -> Result<Self, NovaError> {
        let raw: RawKnowledgeBase = serde_json::from_str(json)
            .map_err(|e| NovaError::Config(format!("knowledge base is not valid JSON: {e}")))?;

        let mut seen = HashSet::new();
        for entry in raw.intents.iter() {
            if !seen.insert(entry.intent.clone()) {
                return Err(NovaError::Config(format!(
                    "knowledge base lists intent `{}` twice",
                    entry.intent
                )));
            }
            if entry.responses.en.is_empty() {
                return Err(NovaError::Config(format!(
                    "intent `{}` has no English response",
                    entry.intent
                )));
            }
        }
        if raw.fallbacks.en.is_empty() {
            return Err(NovaError::Config(
                "knowledge base has no English fallback response".into(),
            ));
        }

        let mut kb = Self {
            intents: raw.intents,
            fallbacks: raw.fallbacks,
        };
        kb.fill_wallet(wallet);
        tracing::debug!(intents = kb.intents.len(), "knowledge base loaded");
        Ok(kb)
    }

    fn fill_wallet(&mut self, wallet: &str) {
        let fill = |list: &mut Vec<String>| {
            for text in list.iter_mut().filter(|t| t.contains(WALLET_PLACEHOLDER)) {
                *text = text.replace(WALLET_PLACEHOLDER, wallet);
            }
        };
        for entry in &mut self.intents {
            fill(&mut entry.responses.en);
            if let Some(ru) = entry.responses.ru.as_mut() {
                fill(ru);
            }
        }
    }

    /// Intents in classification order.
    pub fn intents(&self) -> &[IntentEntry] {
        &self.intents
    }

    pub fn entry(&self, intent: &str) -> Option<&IntentEntry> {
        self.intents.iter().find(|e| e.intent == intent)
    }

    /// The response variant `user_id` gets for `intent` in `language`.
    pub fn response_for(&self, intent: &str, language: Language, user_id: i64) -> Option<&str> {
        self.entry(intent)
            .and_then(|e| pick_variant(user_id, e.responses.get(language)))
    }

    /// The fallback variant `user_id` gets when no intent matched.
    pub fn fallback_for(&self, language: Language, user_id: i64) -> &str {
        pick_variant(user_id, self.fallbacks.get(language)).unwrap_or_default()
    }

    pub fn fallbacks(&self, language: Language) -> &[String] {
        self.fallbacks.get(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = r#"{
        "intents": [
            {"intent": "hello",
             "keywords": {"en": ["hi"], "ru": ["привет"]},
             "responses": {"en": ["Hello!"], "ru": ["Привет!"]}},
            {"intent": "pay",
             "keywords": {"en": ["pay"]},
             "responses": {"en": ["Wallet: {wallet}"]}}
        ],
        "fallbacks": {"en": ["Sorry?"]}
    }"#;

    #[test]
    fn builtin_has_twelve_ordered_intents() {
        let kb = KnowledgeBase::builtin("TWallet").unwrap();
        let names: Vec<&str> = kb.intents().iter().map(|e| e.intent.as_str()).collect();
        assert_eq!(
            names,
            [
                "hello", "price", "delivery", "payment", "features", "custom", "tech",
                "support", "guarantee", "ai_agents", "scrapers", "community"
            ]
        );
        assert_eq!(kb.fallbacks(Language::En).len(), 4);
        assert_eq!(kb.fallbacks(Language::Ru).len(), 4);
    }

    #[test]
    fn builtin_payment_copy_carries_wallet() {
        let kb = KnowledgeBase::builtin("TWallet123").unwrap();
        let payment = kb.entry("payment").unwrap();
        assert!(payment.responses.en.iter().any(|r| r.contains("`TWallet123`")));
        assert!(payment.responses.get(Language::Ru).iter().any(|r| r.contains("TWallet123")));
        assert!(
            kb.intents()
                .iter()
                .flat_map(|e| e.responses.en.iter())
                .all(|r| !r.contains(WALLET_PLACEHOLDER))
        );
    }

    #[test]
    fn missing_russian_responses_fall_back_to_english() {
        let kb = KnowledgeBase::from_json(TINY, "W").unwrap();
        assert_eq!(kb.response_for("pay", Language::Ru, 1), Some("Wallet: W"));
        assert_eq!(kb.fallback_for(Language::Ru, 1), "Sorry?");
    }

    #[test]
    fn unknown_intent_has_no_response() {
        let kb = KnowledgeBase::from_json(TINY, "W").unwrap();
        assert_eq!(kb.response_for("nope", Language::En, 1), None);
    }

    #[test]
    fn duplicate_intent_is_rejected() {
        let json = r#"{
            "intents": [
                {"intent": "a", "keywords": {"en": []}, "responses": {"en": ["x"]}},
                {"intent": "a", "keywords": {"en": []}, "responses": {"en": ["y"]}}
            ],
            "fallbacks": {"en": ["f"]}
        }"#;
        let err = KnowledgeBase::from_json(json, "").unwrap_err();
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn intent_without_english_response_is_rejected() {
        let json = r#"{
            "intents": [{"intent": "a", "keywords": {"en": []}, "responses": {"en": []}}],
            "fallbacks": {"en": ["f"]}
        }"#;
        assert!(KnowledgeBase::from_json(json, "").is_err());
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let err = KnowledgeBase::from_json("{", "").unwrap_err();
        assert!(matches!(err, NovaError::Config(_)));
    }
}
