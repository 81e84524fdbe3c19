// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification against the bundled knowledge base.

use std::sync::Arc;

use nova_knowledge::{IntentClassifier, KnowledgeBase, Language, detect_language, stable_index};

fn classifier() -> IntentClassifier {
    IntentClassifier::new(Arc::new(
        KnowledgeBase::builtin("TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE").unwrap(),
    ))
}

#[test]
fn keywords_route_to_their_intents() {
    let c = classifier();
    let cases = [
        ("Do you accept USDT?", "payment"),
        ("shipping time?", "delivery"),
        ("Can you customize it?", "custom"),
        ("I need a Telegram group bot", "community"),
        ("what are the technical requirements", "tech"),
    ];
    for (text, expected) in cases {
        assert_eq!(
            c.classify(text).intent.as_deref(),
            Some(expected),
            "text: {text}"
        );
    }
}

#[test]
fn russian_messages_use_russian_keywords() {
    let c = classifier();

    let greeting = c.classify("Привет! Расскажите о доставке");
    assert_eq!(greeting.language, Language::Ru);
    assert_eq!(greeting.intent.as_deref(), Some("hello"));

    let bot = c.classify("хочу чат бот");
    assert_eq!(bot.intent.as_deref(), Some("ai_agents"));
}

#[test]
fn language_thresholds() {
    assert_eq!(detect_language("plain latin words"), Language::En);
    assert_eq!(detect_language("абв def gh"), Language::En);
    assert_eq!(detect_language("абвг def gh"), Language::Ru);
}

#[test]
fn ai_agent_price_question_is_a_price_question() {
    let c = classifier();
    let result = c.classify("how much does the AI agent cost");
    assert_eq!(result.intent.as_deref(), Some("price"));
    assert_eq!(result.language, Language::En);

    let kb = c.knowledge_base();
    let reply = kb.response_for("price", result.language, 42).unwrap();
    assert!(
        kb.entry("price")
            .unwrap()
            .responses
            .en
            .iter()
            .any(|r| r == reply)
    );
}

#[test]
fn russian_price_question() {
    let result = classifier().classify("сколько стоит");
    assert_eq!(result.language, Language::Ru);
    assert_eq!(result.intent.as_deref(), Some("price"));

    let kb = KnowledgeBase::builtin("W").unwrap();
    let reply = kb.response_for("price", Language::Ru, 7).unwrap();
    assert!(reply.contains("NOVA"));
    assert!(kb.entry("price").unwrap().responses.get(Language::Ru).contains(&reply.to_string()));
}

#[test]
fn gibberish_falls_back_deterministically() {
    let c = classifier();
    let result = c.classify("asdf qwer zxcv");
    assert_eq!(result.intent, None);

    let kb = c.knowledge_base();
    let first = kb.fallback_for(result.language, 1000).to_string();
    for _ in 0..5 {
        assert_eq!(kb.fallback_for(result.language, 1000), first);
    }
    let fallbacks = kb.fallbacks(Language::En);
    assert_eq!(first, fallbacks[stable_index(1000, fallbacks.len())]);
}
