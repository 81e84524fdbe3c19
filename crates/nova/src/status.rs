// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `nova status` command implementation.
//!
//! Reads the queue files directly, so it works whether or not the bot is
//! running. Unreadable files are reported as errors instead of zero counts.

use std::io::IsTerminal;

use nova_config::NovaConfig;
use nova_core::NovaError;
use nova_storage::PendingStore;
use serde::Serialize;

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub data_dir: String,
    pub pending_messages: usize,
    pub pending_orders: usize,
    pub messages_file_bytes: u64,
    pub orders_file_bytes: u64,
    pub admin_configured: bool,
}

pub fn collect_status(config: &NovaConfig) -> Result<StatusResponse, NovaError> {
    let store = PendingStore::at(&config.storage);
    Ok(StatusResponse {
        data_dir: config.storage.data_dir.clone(),
        pending_messages: store.messages().try_scan_pending()?.len(),
        pending_orders: store.orders().try_scan_pending()?.len(),
        messages_file_bytes: store.messages().file_size(),
        orders_file_bytes: store.orders().file_size(),
        admin_configured: config.telegram.admin_id.is_some(),
    })
}

/// Run the `nova status` command.
///
/// If `--plain` is passed or stdout is not a TTY, disables colors.
pub fn run_status(config: &NovaConfig, json: bool, plain: bool) -> Result<(), NovaError> {
    let status = collect_status(config)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&status).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print_status(&status, use_color);
    }
    Ok(())
}

fn print_status(status: &StatusResponse, use_color: bool) {
    println!();
    println!("  nova status");
    println!("  {}", "-".repeat(35));
    println!("    Data dir:  {}", status.data_dir);
    println!(
        "    Messages:  {} ({} bytes)",
        pending_label(status.pending_messages, use_color),
        status.messages_file_bytes
    );
    println!(
        "    Orders:    {} ({} bytes)",
        pending_label(status.pending_orders, use_color),
        status.orders_file_bytes
    );

    if !status.admin_configured {
        if use_color {
            use colored::Colorize;
            println!("    Admin:     {}", "not configured".yellow());
        } else {
            println!("    Admin:     [WARN] not configured");
        }
        println!();
        println!("  Pending records are replayed only when telegram.admin_id is set.");
    }
    println!();
}

fn pending_label(count: usize, use_color: bool) -> String {
    match (count, use_color) {
        (0, true) => {
            use colored::Colorize;
            format!("{} none pending", "✓".green())
        }
        (0, false) => "[OK] none pending".to_string(),
        (n, true) => {
            use colored::Colorize;
            format!("{} {n} pending", "!".yellow())
        }
        (n, false) => format!("[PENDING] {n} pending"),
    }
}
