// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builders for inbound events from a private chat.
//!
//! In a private chat the chat id equals the user id, which is what these
//! helpers assume.

use nova_core::{EventKind, InboundEvent, Sender};

pub fn sender(user_id: i64) -> Sender {
    Sender {
        id: user_id,
        username: Some(format!("user{user_id}")),
        full_name: format!("Test User {user_id}"),
    }
}

pub fn event(user_id: i64, kind: EventKind) -> InboundEvent {
    InboundEvent {
        chat_id: user_id,
        from: sender(user_id),
        kind,
        timestamp: "2026-01-01T00:00:00+00:00".to_string(),
    }
}

pub fn text(user_id: i64, text: &str) -> InboundEvent {
    event(
        user_id,
        EventKind::Text {
            text: text.to_string(),
        },
    )
}

pub fn command(user_id: i64, name: &str) -> InboundEvent {
    event(
        user_id,
        EventKind::Command {
            name: name.to_string(),
        },
    )
}

pub fn callback(user_id: i64, data: &str) -> InboundEvent {
    event(
        user_id,
        EventKind::Callback {
            id: format!("cb-{user_id}-{data}"),
            data: data.to_string(),
        },
    )
}

pub fn payload(user_id: i64, json: &str) -> InboundEvent {
    event(
        user_id,
        EventKind::StructuredPayload {
            payload: json.to_string(),
        },
    )
}

pub fn reply(user_id: i64, text: &str, replied_text: &str) -> InboundEvent {
    event(
        user_id,
        EventKind::ReplyToMessage {
            text: text.to_string(),
            replied_text: replied_text.to_string(),
        },
    )
}
