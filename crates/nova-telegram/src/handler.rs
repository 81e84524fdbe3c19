// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping Telegram updates to channel-agnostic [`InboundEvent`]s.

use nova_core::{EventKind, InboundEvent, Sender};
use teloxide::types::{CallbackQuery, Message, User};

pub fn sender_of(user: &User) -> Sender {
    Sender {
        id: user.id.0 as i64,
        username: user.username.clone(),
        full_name: user.full_name(),
    }
}

/// Command name of `/name@bot args`, without slash or bot suffix.
pub fn parse_command(text: &str) -> Option<&str> {
    let word = text.strip_prefix('/')?.split_whitespace().next()?;
    let name = word.split('@').next().unwrap_or(word);
    (!name.is_empty()).then_some(name)
}

/// Converts a message into an event.
///
/// Mini-app data wins over text; commands win over replies. Returns `None`
/// for messages without a sender or without anything the bot handles.
pub fn message_to_event(msg: &Message) -> Option<InboundEvent> {
    let from = msg.from.as_ref()?;

    let kind = if let Some(data) = msg.web_app_data() {
        EventKind::StructuredPayload {
            payload: data.data.clone(),
        }
    } else {
        let text = msg.text()?;
        if let Some(name) = parse_command(text) {
            EventKind::Command {
                name: name.to_string(),
            }
        } else if let Some(replied) = msg
            .reply_to_message()
            .and_then(|r| r.text().or_else(|| r.caption()))
        {
            EventKind::ReplyToMessage {
                text: text.to_string(),
                replied_text: replied.to_string(),
            }
        } else {
            EventKind::Text {
                text: text.to_string(),
            }
        }
    };

    Some(InboundEvent {
        chat_id: msg.chat.id.0,
        from: sender_of(from),
        kind,
        timestamp: msg.date.to_rfc3339(),
    })
}

/// Converts an inline button press into an event.
///
/// The bot only talks in private chats, so the answer goes to the presser's
/// own chat.
pub fn callback_to_event(query: &CallbackQuery) -> Option<InboundEvent> {
    let data = query.data.clone()?;
    let from = sender_of(&query.from);
    Some(InboundEvent {
        chat_id: from.id,
        from,
        kind: EventKind::Callback {
            id: query.id.to_string(),
            data,
        },
        timestamp: String::new(),
    })
}
