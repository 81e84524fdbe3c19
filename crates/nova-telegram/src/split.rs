// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splitting outbound text that is longer than one Telegram message.

use nova_core::Formatting;

use crate::markdown;

/// Splits `text` at the best boundary within `max_chars` characters.
///
/// Tries, in order: paragraph boundary (`\n\n`), line boundary (`\n`), word
/// boundary (space), and finally a hard split. Returns `(first, rest)`;
/// `rest` is empty when `text` already fits.
pub fn split_at_paragraph_boundary(text: &str, max_chars: usize) -> (&str, &str) {
    let Some((limit, _)) = text.char_indices().nth(max_chars.max(1)) else {
        return (text, "");
    };

    let search_region = &text[..limit];

    if let Some(pos) = search_region.rfind("\n\n")
        && pos > 0
    {
        return (&text[..pos], text[pos + 2..].trim_start());
    }

    if let Some(pos) = search_region.rfind('\n')
        && pos > 0
    {
        return (&text[..pos], text[pos + 1..].trim_start());
    }

    if let Some(pos) = search_region.rfind(' ')
        && pos > 0
    {
        return (&text[..pos], &text[pos + 1..]);
    }

    (search_region, &text[limit..])
}

/// Cut `text` into pieces of at most `max_chars` characters each.
pub fn split_message(text: &str, max_chars: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let (first, tail) = split_at_paragraph_boundary(rest, max_chars);
        chunks.push(first);
        rest = tail;
    }
    chunks
}

/// Pieces of `text` that each fit in one message of `max_chars` once rendered.
///
/// MarkdownV2 escaping at most doubles a piece, so markdown text that does
/// not fit after rendering is cut at half the limit.
pub fn outbound_chunks(text: &str, formatting: Formatting, max_chars: usize) -> Vec<&str> {
    let (rendered_len, chunk_limit) = match formatting {
        Formatting::Markdown => (
            markdown::to_markdown_v2(text).chars().count(),
            max_chars / 2,
        ),
        Formatting::Plain => (text.chars().count(), max_chars),
    };

    if rendered_len <= max_chars {
        vec![text]
    } else {
        split_message(text, chunk_limit)
    }
}
