// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge base and intent classification for the NOVA sales bot.
//!
//! The knowledge base is an ordered list of intents, each with per-language
//! keywords and canned responses. [`IntentClassifier`] maps free text to one
//! of those intents, and [`select`] picks a response variant per user.

pub mod base;
pub mod classifier;
pub mod language;
pub mod pages;
pub mod select;

pub use base::{IntentEntry, KnowledgeBase, PerLanguage};
pub use classifier::{Classification, IntentClassifier};
pub use language::{Language, detect_language};
pub use select::{pick_variant, stable_index};
