// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text of every message the bot composes at runtime.
//!
//! Operator notices put the user id on an `ID: <n>` line and, for queued
//! messages, the record on a `Ref: #<n>` line. Both come before the quoted
//! `Message:` so user text can never precede them. The admin reply handler
//! reads them back out of the quoted notice.

use std::borrow::Cow;

use nova_knowledge::Language;
use nova_storage::{CartItem, PendingMessage, PendingOrder, StoreStatus};

use nova_core::Sender;

pub const PAYLOAD_ERROR: &str = "⚠️ An error occurred processing your data. Please try again.";
pub const ACCESS_DENIED: &str = "⚠️ Access denied.";
pub const REPLY_SENT: &str = "✅ Response sent to user.";
pub const NO_USER_ID: &str = "❌ Could not find user ID in message.";

/// Text stored for a contact request, so the operator sees it on restart.
pub const CONTACT_REQUEST_TEXT: &str = "Requested contact with developer via web app";

pub const CONTACT_ACK: &str = "👨‍💻 **Developer channel activated**\n\n\
I've forwarded your request directly to the developer. They'll contact you shortly.\n\n\
Meanwhile, you can ask any questions - I'll help with the technical part.";

pub const RESTART_NOTICE: &str = "🟢 **NOVA SYSTEMS bot restarted successfully!**\n\n\
✅ All pending messages and orders have been restored\n\
✅ Bot is ready to process new requests\n\
✅ Data recovery system is active\n\n\
Use /status to check current state.";

/// Longest user text quoted verbatim in an operator notice, in characters.
pub const QUOTE_LIMIT: usize = 1000;

pub const DELIVERY_STANDARD: &str = "1 business day";
pub const DELIVERY_CUSTOM: &str = "1-3 business days (customization may extend)";

fn handle(username: Option<&str>) -> &str {
    username.unwrap_or("unknown")
}

/// User text cut to [`QUOTE_LIMIT`] characters so the notice stays sendable.
fn quote(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(QUOTE_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}…", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

pub fn wallet_block(wallet: &str) -> String {
    format!("**Payment Wallet (TRC20):**\n`{wallet}`\n\nSend transaction hash after payment.")
}

pub fn new_user(from: &Sender) -> String {
    format!(
        "👤 New user:\nID: {}\nUsername: @{}\nName: {}",
        from.id,
        from.handle(),
        from.full_name
    )
}

pub fn unprocessed_query(
    from: &Sender,
    text: &str,
    language: Language,
    reply: &str,
    record: Option<u64>,
) -> String {
    format!(
        "🤔 **UNPROCESSED QUERY**\nFrom: @{}\nID: {}{}\nLanguage: {language}\nMessage: {}\n\nBot replied: {reply}",
        from.handle(),
        from.id,
        ref_line(record),
        quote(text)
    )
}

pub fn contact_request(from: &Sender, record: Option<u64>) -> String {
    format!(
        "📞 **CONTACT REQUEST**\nUser requested contact with developer\nID: {}{}\nUsername: @{}\nName: {}",
        from.id,
        ref_line(record),
        from.handle(),
        from.full_name
    )
}

pub fn new_order(from: &Sender, order: &PendingOrder) -> String {
    let items: Vec<String> = order
        .cart
        .iter()
        .map(|item| format!("- {} (${})", item.name, item.price))
        .collect();
    format!(
        "💰 **NEW ORDER!**\n\nUser: @{}\nID: {}\nAmount: ${}\n\n**Order:**\n{}\n\n**Delivery:** {}",
        from.handle(),
        from.id,
        order.total,
        items.join("\n"),
        order.delivery_time
    )
}

pub fn restored_message(msg: &PendingMessage) -> String {
    format!(
        "📩 **MESSAGE RESTORED**\n\nFrom: @{}\nID: {}\nRef: #{}\nTime: {}\nMessage: {}\n\n(Received while offline)",
        handle(msg.username.as_deref()),
        msg.user_id,
        msg.id,
        msg.timestamp,
        quote(&msg.text)
    )
}

pub fn restored_order(order: &PendingOrder) -> String {
    format!(
        "💰 **ORDER RESTORED**\n\nUser: @{}\nID: {}\nTime: {}\nTotal: ${}\n\nItems:\n{}\n\n(Received while offline)",
        handle(order.username.as_deref()),
        order.user_id,
        order.timestamp,
        order.total,
        bullet_items(&order.cart)
    )
}

/// Invoice sent to the user after a mini-app checkout.
pub fn invoice(cart: &[CartItem], total: f64, delivery_time: &str, wallet: &str) -> String {
    format!(
        "✅ **INVOICE CREATED**\n\n\
📦 **Your order:**\n\
{items}\n\
──────────────\n\
💎 **Total: ${total}**\n\n\
🚀 **Delivery:** {delivery_time}\n\n\
💳 **Cryptocurrency Payment:**\n\
Wallet (TRC20):\n\
`{wallet}`\n\n\
**Instructions:**\n\
1. Send ${total} to the wallet above\n\
2. Send transaction hash (Transaction Hash)\n\
3. We activate delivery within an hour\n\n\
After payment you receive:\n\
✓ Complete source code\n\
✓ Installation guide\n\
✓ Access to private support\n\
✓ Setup assistance (1 hour)",
        items = bullet_items(cart)
    )
}

pub fn developer_response(text: &str) -> String {
    format!("👨‍💻 **Response from developer:**\n\n{text}")
}

pub fn send_failed(error: &impl std::fmt::Display) -> String {
    format!("❌ Error sending: {error}")
}

pub fn status_report(status: &StoreStatus, checked_at: &str) -> String {
    format!(
        "🤖 **Bot Status**\n\n\
🟢 Online and working\n\
📨 Pending messages: {}\n\
💰 Pending orders: {}\n\
💾 Data files: {} bytes\n\n\
Last check: {checked_at}",
        status.pending_messages, status.pending_orders, status.messages_file_bytes
    )
}

fn bullet_items(cart: &[CartItem]) -> String {
    cart.iter()
        .map(|item| format!("• {} - ${}", item.name, item.price))
        .collect::<Vec<_>>()
        .join("\n")
}

fn ref_line(record: Option<u64>) -> String {
    record.map(|id| format!("\nRef: #{id}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_storage::Tier;

    fn sender() -> Sender {
        Sender {
            id: 555,
            username: Some("alice".into()),
            full_name: "Alice Smith".into(),
        }
    }

    fn core_cart() -> Vec<CartItem> {
        vec![CartItem {
            name: "AI Support Core".into(),
            price: 290.0,
            tier: Tier::Core,
        }]
    }

    #[test]
    fn invoice_prints_whole_dollar_amounts() {
        let text = invoice(&core_cart(), 290.0, DELIVERY_STANDARD, "TWallet");
        assert!(text.contains("• AI Support Core - $290\n"));
        assert!(text.contains("💎 **Total: $290**"));
        assert!(text.contains("🚀 **Delivery:** 1 business day"));
        assert!(text.contains("`TWallet`"));
        assert!(text.contains("1. Send $290 to the wallet above"));
    }

    #[test]
    fn fractional_amounts_keep_cents() {
        let text = invoice(&core_cart(), 290.5, DELIVERY_STANDARD, "W");
        assert!(text.contains("Total: $290.5"));
    }

    #[test]
    fn unprocessed_query_carries_id_and_ref_before_text() {
        let text = unprocessed_query(&sender(), "blorp", Language::En, "Sorry?", Some(12));
        assert!(text.contains("\nID: 555\nRef: #12\nLanguage: en\nMessage: blorp\n"));
        assert!(text.ends_with("Bot replied: Sorry?"));
    }

    #[test]
    fn long_text_is_cut_in_notices() {
        let long = "ж".repeat(4000);
        let text = unprocessed_query(&sender(), &long, Language::Ru, "Sorry?", Some(1));
        assert!(text.chars().count() < 4096);
        assert!(text.contains(&format!("Message: {}…\n", "ж".repeat(QUOTE_LIMIT))));

        let msg = PendingMessage {
            id: 1,
            user_id: 555,
            username: None,
            text: long,
            timestamp: "2025-01-01T00:00:00.000000".into(),
            processed: false,
        };
        assert!(restored_message(&msg).chars().count() < 4096);
    }

    #[test]
    fn short_text_is_quoted_verbatim() {
        let exact = "a".repeat(QUOTE_LIMIT);
        assert_eq!(quote(&exact), exact.as_str());
        assert_eq!(quote("hi"), "hi");
    }

    #[test]
    fn contact_request_puts_ref_after_id() {
        let text = contact_request(&sender(), Some(4));
        assert!(text.contains("\nID: 555\nRef: #4\nUsername: @alice\nName: Alice Smith"));
    }

    #[test]
    fn missing_username_reads_unknown() {
        let msg = PendingMessage {
            id: 3,
            user_id: 9,
            username: None,
            text: "hi".into(),
            timestamp: "2025-01-01T00:00:00.000000".into(),
            processed: false,
        };
        let text = restored_message(&msg);
        assert!(text.contains("From: @unknown\nID: 9\nRef: #3\n"));
        assert!(text.ends_with("(Received while offline)"));
    }

    #[test]
    fn new_order_lists_items() {
        let order = PendingOrder::new(555, Some("alice".into()), core_cart(), 290.0, DELIVERY_STANDARD);
        let text = new_order(&sender(), &order);
        assert!(text.contains("Amount: $290"));
        assert!(text.contains("**Order:**\n- AI Support Core ($290)"));
        assert!(!text.contains("Ref: #"));
    }

    #[test]
    fn status_report_lists_counts() {
        let status = StoreStatus {
            pending_messages: 2,
            pending_orders: 1,
            messages_file_bytes: 512,
        };
        let text = status_report(&status, "2025-01-01 12:00:00");
        assert!(text.contains("📨 Pending messages: 2"));
        assert!(text.contains("💰 Pending orders: 1"));
        assert!(text.contains("💾 Data files: 512 bytes"));
        assert!(text.ends_with("Last check: 2025-01-01 12:00:00"));
    }
}
