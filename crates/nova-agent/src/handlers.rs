// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-event handlers.

use nova_core::{EventKind, InboundEvent, Keyboard, NovaError, OutboundMessage, Sender};
use nova_knowledge::pages;
use nova_storage::PendingOrder;
use tracing::{debug, info, warn};

use crate::BotLoop;
use crate::correlation::{RecordMatch, parse_reply_target};
use crate::payload::{WebAppPayload, delivery_time};
use crate::templates;

const STATUS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) async fn dispatch(bot: &BotLoop, event: InboundEvent) -> Result<(), NovaError> {
    let InboundEvent {
        chat_id, from, kind, ..
    } = event;

    match kind {
        EventKind::Command { name } => handle_command(bot, chat_id, &from, &name).await,
        EventKind::Text { text } => handle_text(bot, chat_id, &from, &text).await,
        EventKind::Callback { id, data } => handle_callback(bot, chat_id, &id, &data).await,
        EventKind::StructuredPayload { payload } => {
            handle_payload(bot, chat_id, &from, &payload).await
        }
        EventKind::ReplyToMessage { text, replied_text } if bot.is_admin(from.id) => {
            handle_admin_reply(bot, chat_id, &text, &replied_text).await
        }
        EventKind::ReplyToMessage { text, .. } => handle_text(bot, chat_id, &from, &text).await,
    }
}

async fn handle_command(
    bot: &BotLoop,
    chat_id: i64,
    from: &Sender,
    name: &str,
) -> Result<(), NovaError> {
    match name {
        "start" => {
            let welcome =
                OutboundMessage::markdown(chat_id, pages::WELCOME).with_keyboard(Keyboard::MainMenu);
            bot.reply(welcome).await?;
            bot.notify_admin(templates::new_user(from)).await;
            Ok(())
        }
        "status" => handle_status(bot, chat_id, from).await,
        other => {
            debug!(command = other, "unknown command, treating as text");
            handle_text(bot, chat_id, from, &format!("/{other}")).await
        }
    }
}

async fn handle_status(bot: &BotLoop, chat_id: i64, from: &Sender) -> Result<(), NovaError> {
    if !bot.is_admin(from.id) {
        info!(user_id = from.id, "status requested by non-admin");
        return bot
            .reply(OutboundMessage::plain(chat_id, templates::ACCESS_DENIED))
            .await;
    }

    let checked_at = chrono::Local::now().format(STATUS_TIME_FORMAT).to_string();
    let report = templates::status_report(&bot.store.status(), &checked_at);
    bot.reply(OutboundMessage::markdown(chat_id, report)).await
}

/// Menu buttons get their page; anything else is queued, classified and
/// answered.
async fn handle_text(
    bot: &BotLoop,
    chat_id: i64,
    from: &Sender,
    text: &str,
) -> Result<(), NovaError> {
    if let Some(page) = pages::menu_page(text, &bot.settings.wallet) {
        let mut msg = OutboundMessage::markdown(chat_id, page.text);
        msg.keyboard = page.keyboard;
        return bot.reply(msg).await;
    }

    let record = bot.store.record_message(from.id, from.username.as_deref(), text);
    let classification = bot.classifier.classify(text);
    let kb = bot.classifier.knowledge_base();

    let Some(intent) = classification.intent.as_deref() else {
        let fallback = kb.fallback_for(classification.language, from.id);
        bot.reply(OutboundMessage::markdown(chat_id, fallback)).await?;
        bot.notify_admin(templates::unprocessed_query(
            from,
            text,
            classification.language,
            fallback,
            record,
        ))
        .await;
        return Ok(());
    };

    let answer = kb
        .response_for(intent, classification.language, from.id)
        .unwrap_or_else(|| kb.fallback_for(classification.language, from.id));
    bot.reply(OutboundMessage::markdown(chat_id, answer)).await?;

    if intent == "payment" {
        bot.reply(OutboundMessage::markdown(
            chat_id,
            templates::wallet_block(&bot.settings.wallet),
        ))
        .await?;
    }

    match record {
        Some(id) => bot.store.mark_message_processed(id),
        None => bot.store.mark_messages_matching(from.id, text),
    };
    Ok(())
}

async fn handle_callback(
    bot: &BotLoop,
    chat_id: i64,
    callback_id: &str,
    data: &str,
) -> Result<(), NovaError> {
    match pages::product_page(data) {
        Some(page) => bot.reply(OutboundMessage::markdown(chat_id, page)).await?,
        None => debug!(data, "ignoring unknown callback"),
    }
    bot.channel.answer_callback(callback_id).await
}

async fn handle_payload(
    bot: &BotLoop,
    chat_id: i64,
    from: &Sender,
    raw: &str,
) -> Result<(), NovaError> {
    let payload = match WebAppPayload::parse(raw) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(user_id = from.id, error = %e, "rejected mini-app payload");
            return bot
                .reply(OutboundMessage::plain(chat_id, templates::PAYLOAD_ERROR))
                .await;
        }
    };

    match payload {
        WebAppPayload::Contact => {
            let record = bot.store.record_message(
                from.id,
                from.username.as_deref(),
                templates::CONTACT_REQUEST_TEXT,
            );
            bot.reply(
                OutboundMessage::markdown(chat_id, templates::CONTACT_ACK)
                    .with_keyboard(Keyboard::MainMenu),
            )
            .await?;
            bot.notify_admin(templates::contact_request(from, record))
                .await;
        }
        WebAppPayload::Order { cart, total } => {
            let delivery = delivery_time(&cart);
            let order = PendingOrder::new(from.id, from.username.clone(), cart, total, delivery);
            let record = bot.store.record_order(order.clone());

            let invoice = templates::invoice(&order.cart, total, delivery, &bot.settings.wallet);
            bot.reply(OutboundMessage::markdown(chat_id, invoice)).await?;

            let delivered = bot.notify_admin(templates::new_order(from, &order)).await;
            if delivered && let Some(id) = record {
                bot.store.mark_order_processed(id);
            }
            info!(user_id = from.id, total, items = order.cart.len(), "order received");
        }
    }
    Ok(())
}

async fn handle_admin_reply(
    bot: &BotLoop,
    chat_id: i64,
    text: &str,
    replied_text: &str,
) -> Result<(), NovaError> {
    let target = match parse_reply_target(replied_text) {
        Ok(target) => target,
        Err(e) => {
            debug!(error = %e, "admin reply without a user id");
            return bot
                .reply(OutboundMessage::plain(chat_id, templates::NO_USER_ID))
                .await;
        }
    };

    let forward = OutboundMessage::markdown(target.user_id, templates::developer_response(text));
    if let Err(e) = bot.channel.send(forward).await {
        warn!(user_id = target.user_id, error = %e, "failed to forward admin reply");
        return bot
            .reply(OutboundMessage::plain(chat_id, templates::send_failed(&e)))
            .await;
    }

    let settled = match &target.record {
        RecordMatch::Id(id) => bot.store.mark_user_message_processed(target.user_id, *id),
        RecordMatch::Text(message) => bot.store.mark_messages_matching(target.user_id, message),
        RecordMatch::Nothing => 0,
    };
    info!(user_id = target.user_id, settled, "admin reply delivered");

    bot.reply(OutboundMessage::plain(chat_id, templates::REPLY_SENT))
        .await
}
