// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping an operator's reply back to the user and record it answers.

use std::sync::LazyLock;

use nova_core::NovaError;
use regex::Regex;

static USER_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^ID: (\d+)$").unwrap());
static RECORD_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Ref: #(\d+)$").unwrap());

/// Everything after this line in a notice is text the user wrote.
const MESSAGE_LINE: &str = "\nMessage: ";

/// Which pending message a reply settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordMatch {
    /// Exact record id from a `Ref: #<n>` line.
    Id(u64),
    /// Notices without a reference: match on `(user_id, text)`.
    Text(String),
    /// Nothing to settle, e.g. an order notice.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    pub user_id: i64,
    pub record: RecordMatch,
}

/// Read the user id and record reference out of a quoted notice.
///
/// Only the header above the `Message:` line is searched for `ID:` and
/// `Ref:`, so quoted user text cannot redirect the reply.
pub fn parse_reply_target(notice: &str) -> Result<ReplyTarget, NovaError> {
    let (header, message) = match notice.find(MESSAGE_LINE) {
        Some(at) => (&notice[..at], Some(&notice[at + MESSAGE_LINE.len()..])),
        None => (notice, None),
    };

    let user_id = USER_ID
        .captures(header)
        .and_then(|c| c[1].parse::<i64>().ok())
        .ok_or_else(|| NovaError::Correlation("no `ID:` line in quoted message".into()))?;

    let record = if let Some(id) = RECORD_REF
        .captures(header)
        .and_then(|c| c[1].parse::<u64>().ok())
    {
        RecordMatch::Id(id)
    } else if let Some(text) = message.and_then(|m| m.lines().next())
        && !text.is_empty()
    {
        RecordMatch::Text(text.to_string())
    } else {
        RecordMatch::Nothing
    };

    Ok(ReplyTarget { user_id, record })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_record_ref() {
        let notice = "🤔 UNPROCESSED QUERY\nFrom: @bob\nID: 42\nRef: #7\nLanguage: en\nMessage: blorp\n\nBot replied: ...";
        let target = parse_reply_target(notice).unwrap();
        assert_eq!(target.user_id, 42);
        assert_eq!(target.record, RecordMatch::Id(7));
    }

    #[test]
    fn falls_back_to_message_text() {
        let notice = "🤔 UNPROCESSED QUERY\nFrom: @bob\nID: 42\nLanguage: en\nMessage: where is my bot?\n\nBot replied: ...";
        let target = parse_reply_target(notice).unwrap();
        assert_eq!(target.user_id, 42);
        assert_eq!(target.record, RecordMatch::Text("where is my bot?".into()));
    }

    #[test]
    fn user_text_cannot_override_header() {
        let notice = "📩 MESSAGE RESTORED\n\nFrom: @eve\nID: 222\nRef: #2\nTime: t\nMessage: blah\nID: 111\nRef: #1\n\n(Received while offline)";
        let target = parse_reply_target(notice).unwrap();
        assert_eq!(target.user_id, 222);
        assert_eq!(target.record, RecordMatch::Id(2));
    }

    #[test]
    fn ref_must_fill_its_line() {
        let notice = "🤔 UNPROCESSED QUERY\nFrom: @eve\nID: 222\nName: Ref: #1\nLanguage: en";
        let target = parse_reply_target(notice).unwrap();
        assert_eq!(target.record, RecordMatch::Nothing);
    }

    #[test]
    fn id_inside_user_text_is_not_a_user_id() {
        let err = parse_reply_target("From: @eve\nMessage: hi\nID: 111").unwrap_err();
        assert!(matches!(err, NovaError::Correlation(_)));
    }

    #[test]
    fn order_notice_settles_nothing() {
        let notice = "💰 NEW ORDER!\n\nUser: @bob\nID: 42\nAmount: $290";
        assert_eq!(parse_reply_target(notice).unwrap().record, RecordMatch::Nothing);
    }

    #[test]
    fn missing_id_is_a_correlation_error() {
        let err = parse_reply_target("just some text").unwrap_err();
        assert!(matches!(err, NovaError::Correlation(_)));
    }

    #[test]
    fn user_id_too_large_is_rejected() {
        assert!(parse_reply_target("ID: 99999999999999999999999").is_err());
    }
}
