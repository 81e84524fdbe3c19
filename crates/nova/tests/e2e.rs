// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the complete bot pipeline.
//!
//! Each test drives a real `BotLoop` through `MockChannel` with an isolated
//! data directory. Tests are independent and order-insensitive.

use std::time::Duration;

use nova_core::Keyboard;
use nova_test_utils::{TEST_ADMIN_ID, TestHarness, events};
use tokio_util::sync::CancellationToken;

async fn run_until_drained(harness: &TestHarness) {
    harness.channel.close();
    tokio::time::timeout(
        Duration::from_secs(5),
        harness.bot.run(CancellationToken::new()),
    )
    .await
    .expect("bot loop did not stop")
    .unwrap();
}

// ---- A customer session from /start to checkout ----

#[tokio::test]
async fn customer_session_through_the_loop() {
    let harness = TestHarness::builder().build().unwrap();
    let user = 31337;

    for event in [
        events::command(user, "start"),
        events::text(user, "💰 Prices & Products"),
        events::callback(user, "product_ai"),
        events::text(user, "сколько стоит агент?"),
        events::payload(
            user,
            r#"{"type":"order","cart":[{"name":"AI Support Core","price":290,"tier":"core"}],"total":290}"#,
        ),
    ] {
        harness.channel.inject_event(event).await;
    }
    run_until_drained(&harness).await;

    let replies = harness.sent_to(user).await;
    assert_eq!(replies.len(), 5);
    assert_eq!(replies[0].keyboard, Some(Keyboard::MainMenu));
    assert_eq!(replies[1].keyboard, Some(Keyboard::Products));
    assert!(replies[2].text.contains("NOVA Automated Agents"));
    assert!(replies[4].text.starts_with("✅ **INVOICE CREATED**"));

    let notices = harness.admin_notices().await;
    assert_eq!(notices.len(), 2);
    assert!(notices[0].text.starts_with("👤 New user:"));
    assert!(notices[1].text.starts_with("💰 **NEW ORDER!**"));

    assert!(harness.store.pending_messages().is_empty());
    assert!(harness.store.pending_orders().is_empty());
}

// ---- Messages that arrive while the operator is unreachable ----

#[tokio::test]
async fn unanswered_question_survives_restart_and_gets_answered() {
    let user = 4040;
    let first = TestHarness::builder().build().unwrap();
    first.channel.fail_sends_to(TEST_ADMIN_ID).await;
    first
        .dispatch(events::text(user, "do you sell moon rocks"))
        .await
        .unwrap();
    assert_eq!(first.store.pending_messages().len(), 1);
    let data_dir = first.into_data_dir();

    // Restart on the same data directory.
    let second = TestHarness::builder()
        .with_data_dir(data_dir)
        .build()
        .unwrap();
    let report = second.bot.recover().await;
    assert_eq!(report.messages_restored, 1);

    let restored = second.admin_notices().await.remove(0).text;
    assert!(restored.contains("do you sell moon rocks"));
    assert!(restored.contains(&format!("\nID: {user}\n")));

    // Already marked by recovery; the reply still reaches the user.
    second
        .dispatch(events::reply(TEST_ADMIN_ID, "Not yet, sorry", &restored))
        .await
        .unwrap();
    let to_user = second.sent_to(user).await;
    assert_eq!(to_user.len(), 1);
    assert!(to_user[0].text.ends_with("Not yet, sorry"));
    assert!(second.store.pending_messages().is_empty());
}

#[tokio::test]
async fn second_restart_replays_nothing() {
    let first = TestHarness::builder().build().unwrap();
    first
        .store
        .record_message(1, Some("early"), "left over from last run");
    first.bot.recover().await;
    let data_dir = first.into_data_dir();

    let second = TestHarness::builder()
        .with_data_dir(data_dir)
        .build()
        .unwrap();
    let report = second.bot.recover().await;
    assert_eq!(report.messages_restored, 0);
    assert_eq!(report.orders_restored, 0);
    // Only the restart notice.
    assert_eq!(second.admin_notices().await.len(), 1);
}
