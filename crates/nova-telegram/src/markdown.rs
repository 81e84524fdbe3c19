// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering bot text for Telegram's MarkdownV2 parse mode.
//!
//! Bot text uses a small markup: `**bold**` and `` `code` ``. Everything
//! else is literal, so the 18 MarkdownV2 special characters (and the
//! backslash) are escaped outside code spans.

/// Characters that must be escaped in MarkdownV2 outside code spans.
const SPECIAL_CHARS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    '\\',
];

/// Converts bot markup to MarkdownV2.
///
/// A `**` opens bold only when a closing `**` follows; a lone backtick is
/// escaped like any other special character.
pub fn to_markdown_v2(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    let mut bold_open = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '`'
            && let Some(end) = find_from(&chars, i + 1, |c| c == '`')
        {
            out.push('`');
            for &c in &chars[i + 1..end] {
                if c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('`');
            i = end + 1;
            continue;
        }

        if ch == '*' && chars.get(i + 1) == Some(&'*') && (bold_open || has_bold_close(&chars, i + 2))
        {
            out.push('*');
            bold_open = !bold_open;
            i += 2;
            continue;
        }

        if SPECIAL_CHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
        i += 1;
    }

    out
}

/// Text sent when Telegram rejects the MarkdownV2 rendering.
pub fn to_plain(text: &str) -> String {
    text.replace("**", "")
}

fn find_from(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> Option<usize> {
    chars
        .get(start..)?
        .iter()
        .position(|&c| pred(c))
        .map(|pos| start + pos)
}

fn has_bold_close(chars: &[char], start: usize) -> bool {
    chars
        .get(start..)
        .is_some_and(|rest| rest.windows(2).any(|w| w == ['*', '*']))
}
