// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword and fuzzy intent classification.
//!
//! Two passes over the knowledge base in order:
//!
//! 1. **Substring**: every keyword found in the lower-cased text scores twice
//!    its character length.
//! 2. **Fuzzy**: only when no keyword of at least two characters matched,
//!    the whole text is compared to each keyword with normalized Levenshtein
//!    similarity.
//!
//! Substring scores and similarity ratios share one `best` value and one
//! `> 0.7` acceptance threshold.

use std::sync::Arc;

use crate::base::{IntentEntry, KnowledgeBase};
use crate::language::{Language, detect_language};

/// Similarity a fuzzy match must exceed, and the acceptance threshold.
const MATCH_THRESHOLD: f64 = 0.7;

/// Substring scores below this trigger the fuzzy pass.
const FUZZY_BELOW: f64 = 3.0;

/// Result of classifying one message.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub intent: Option<String>,
    pub language: Language,
    /// Winning score: a substring score or a similarity ratio.
    pub score: f64,
}

/// Maps free text to an intent of a [`KnowledgeBase`].
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    kb: Arc<KnowledgeBase>,
}

impl IntentClassifier {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn classify(&self, text: &str) -> Classification {
        let language = detect_language(text);
        let lowered = text.to_lowercase();

        let mut best = Best::default();
        for entry in self.kb.intents() {
            for keyword in keywords(entry, language) {
                if lowered.contains(keyword.as_str()) {
                    best.offer(&entry.intent, 2.0 * keyword.chars().count() as f64);
                }
            }
        }

        if best.score < FUZZY_BELOW {
            for entry in self.kb.intents() {
                for keyword in keywords(entry, language) {
                    let ratio = strsim::normalized_levenshtein(&lowered, keyword);
                    if ratio > MATCH_THRESHOLD {
                        best.offer(&entry.intent, ratio);
                    }
                }
            }
        }

        let intent = (best.score > MATCH_THRESHOLD)
            .then_some(best.intent)
            .flatten()
            .map(str::to_string);

        tracing::debug!(
            intent = intent.as_deref().unwrap_or("none"),
            %language,
            score = best.score,
            "classified message"
        );

        Classification {
            intent,
            language,
            score: best.score,
        }
    }
}

/// English keywords always, Russian ones only for Russian text.
fn keywords(entry: &IntentEntry, language: Language) -> impl Iterator<Item = &String> {
    let ru: &[String] = match language {
        Language::Ru => entry.keywords.ru.as_deref().unwrap_or_default(),
        Language::En => &[],
    };
    entry.keywords.en.iter().chain(ru)
}

#[derive(Default)]
struct Best<'a> {
    intent: Option<&'a str>,
    score: f64,
}

impl<'a> Best<'a> {
    /// Strictly greater scores win, so the earliest intent keeps a tie.
    fn offer(&mut self, intent: &'a str, score: f64) {
        if score > self.score {
            self.score = score;
            self.intent = Some(intent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(Arc::new(KnowledgeBase::builtin("TWallet").unwrap()))
    }

    fn intent_of(text: &str) -> Option<String> {
        classifier().classify(text).intent
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        assert_eq!(intent_of("What is your PRICING?").as_deref(), Some("price"));
        assert_eq!(intent_of("Tell me about DELIVERY").as_deref(), Some("delivery"));
    }

    #[test]
    fn longer_keyword_wins() {
        // "scraper" (14) beats "price" (10).
        let c = classifier().classify("price of a scraper");
        assert_eq!(c.intent.as_deref(), Some("scrapers"));
        assert_eq!(c.score, 14.0);
    }

    #[test]
    fn tie_keeps_earlier_intent() {
        // "how much" (price) and "ai agent" (ai_agents) both score 16.
        let c = classifier().classify("how much does the AI agent cost");
        assert_eq!(c.intent.as_deref(), Some("price"));
        assert_eq!(c.language, Language::En);
        assert_eq!(c.score, 16.0);
    }

    #[test]
    fn russian_keywords_need_russian_text() {
        let c = classifier().classify("сколько стоит");
        assert_eq!(c.language, Language::Ru);
        assert_eq!(c.intent.as_deref(), Some("price"));
        assert_eq!(c.score, 26.0);
    }

    #[test]
    fn russian_keyword_ignored_in_english_text() {
        // Mostly Latin text: the Russian keyword "цена" is not consulted.
        let c = classifier().classify("цена for the whole bundle please");
        assert_eq!(c.language, Language::En);
        assert_eq!(c.intent, None);
    }

    #[test]
    fn fuzzy_pass_catches_typos() {
        let c = classifier().classify("pricng");
        assert_eq!(c.intent.as_deref(), Some("price"));
        assert!(c.score > 0.7 && c.score < 1.0);
    }

    #[test]
    fn gibberish_has_no_intent() {
        let c = classifier().classify("qwxz zzvb");
        assert_eq!(c.intent, None);
        assert_eq!(c.language, Language::En);
    }

    #[test]
    fn empty_text_has_no_intent() {
        assert_eq!(intent_of(""), None);
    }
}
