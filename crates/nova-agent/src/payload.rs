// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mini-app payloads.

use nova_core::NovaError;
use nova_storage::{CartItem, Tier};
use serde::Deserialize;

use crate::templates::{DELIVERY_CUSTOM, DELIVERY_STANDARD};

/// A JSON document posted by the mini-app, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WebAppPayload {
    /// The user asked to talk to a developer.
    Contact,
    /// Checkout of the mini-app cart.
    Order { cart: Vec<CartItem>, total: f64 },
}

impl WebAppPayload {
    pub fn parse(raw: &str) -> Result<Self, NovaError> {
        serde_json::from_str(raw).map_err(|e| NovaError::Payload(e.to_string()))
    }
}

/// Pro items need customization, which stretches delivery.
pub fn delivery_time(cart: &[CartItem]) -> &'static str {
    if cart.iter().any(|item| item.tier == Tier::Pro) {
        DELIVERY_CUSTOM
    } else {
        DELIVERY_STANDARD
    }
}
