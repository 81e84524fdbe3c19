// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup recovery: replay pending records to the operator.
//!
//! Runs once before the event loop. Each pending message, then each pending
//! order, is sent to the admin in file order. A record is marked processed
//! only after its notice was accepted by the channel; anything that fails
//! stays pending and is retried on the next start.

use nova_core::{ChannelAdapter, OutboundMessage};
use nova_storage::PendingStore;
use tracing::{info, warn};

use crate::templates;

/// Outcome of one recovery pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryReport {
    pub messages_restored: usize,
    pub orders_restored: usize,
    /// Notices the channel refused; their records stay pending.
    pub failed: usize,
    /// No admin configured, nothing was sent or marked.
    pub skipped: bool,
}

pub async fn restore_pending(
    channel: &dyn ChannelAdapter,
    store: &PendingStore,
    admin_id: Option<i64>,
) -> RecoveryReport {
    let mut report = RecoveryReport::default();
    let Some(admin_id) = admin_id else {
        info!("no admin configured, pending records left for a later start");
        report.skipped = true;
        return report;
    };

    for msg in store.pending_messages() {
        let notice = OutboundMessage::markdown(admin_id, templates::restored_message(&msg));
        match channel.send(notice).await {
            Ok(_) => {
                store.mark_message_processed(msg.id);
                report.messages_restored += 1;
            }
            Err(e) => {
                warn!(id = msg.id, user_id = msg.user_id, error = %e, "failed to restore message");
                report.failed += 1;
            }
        }
    }

    for order in store.pending_orders() {
        let notice = OutboundMessage::markdown(admin_id, templates::restored_order(&order));
        match channel.send(notice).await {
            Ok(_) => {
                store.mark_order_processed(order.id);
                report.orders_restored += 1;
            }
            Err(e) => {
                warn!(id = order.id, user_id = order.user_id, error = %e, "failed to restore order");
                report.failed += 1;
            }
        }
    }

    info!(
        messages = report.messages_restored,
        orders = report.orders_restored,
        failed = report.failed,
        "pending data restored"
    );
    report
}
