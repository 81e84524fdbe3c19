// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-language detection based on the share of Cyrillic letters.

use serde::{Deserialize, Serialize};

/// Language of an incoming message.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// Detect the language of `text`.
///
/// Counts lower-case Cyrillic letters (`а`..=`я` and `ё`) after lower-casing
/// and answers [`Language::Ru`] when they make up more than a third of the
/// characters.
pub fn detect_language(text: &str) -> Language {
    let total = text.chars().count();
    let cyrillic = text
        .to_lowercase()
        .chars()
        .filter(|c| ('а'..='я').contains(c) || *c == 'ё')
        .count();

    if cyrillic * 3 > total {
        Language::Ru
    } else {
        Language::En
    }
}
