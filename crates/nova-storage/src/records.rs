// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record types persisted in the queue files.
//!
//! Field names match the files written by earlier deployments of the bot,
//! so existing `data/` directories load unchanged. The `id` field is newer:
//! records without one deserialize with id `0` and are numbered on load.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

/// A record that can live in a [`JsonQueue`](crate::JsonQueue).
pub trait QueueRecord: Serialize + DeserializeOwned {
    /// Short name used in log fields.
    const KIND: &'static str;

    /// Record id, `0` when not yet assigned.
    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
    fn is_processed(&self) -> bool;
    fn set_processed(&mut self, processed: bool);
    fn set_timestamp(&mut self, timestamp: String);
}

/// A user message waiting for an answer or an operator notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingMessage {
    #[serde(default)]
    pub id: u64,
    pub user_id: i64,
    pub username: Option<String>,
    pub text: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub processed: bool,
}

impl PendingMessage {
    pub fn new(user_id: i64, username: Option<String>, text: impl Into<String>) -> Self {
        Self {
            id: 0,
            user_id,
            username,
            text: text.into(),
            timestamp: String::new(),
            processed: false,
        }
    }
}

impl QueueRecord for PendingMessage {
    const KIND: &'static str = "message";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn is_processed(&self) -> bool {
        self.processed
    }

    fn set_processed(&mut self, processed: bool) {
        self.processed = processed;
    }

    fn set_timestamp(&mut self, timestamp: String) {
        self.timestamp = timestamp;
    }
}

/// Product tier of a cart item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Core,
    Pro,
}

/// One line of a mini-app cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
    /// Anything other than `"pro"`, including a missing or null tier, counts
    /// as `core`.
    #[serde(default, deserialize_with = "lenient_tier")]
    pub tier: Tier,
}

fn lenient_tier<'de, D>(deserializer: D) -> Result<Tier, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("pro") => Tier::Pro,
        _ => Tier::Core,
    })
}

/// An order placed through the mini-app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    #[serde(default)]
    pub id: u64,
    pub username: Option<String>,
    pub user_id: i64,
    pub cart: Vec<CartItem>,
    pub total: f64,
    pub delivery_time: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub processed: bool,
}

impl PendingOrder {
    pub fn new(
        user_id: i64,
        username: Option<String>,
        cart: Vec<CartItem>,
        total: f64,
        delivery_time: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            username,
            user_id,
            cart,
            total,
            delivery_time: delivery_time.into(),
            timestamp: String::new(),
            processed: false,
        }
    }

    pub fn has_pro_item(&self) -> bool {
        self.cart.iter().any(|item| item.tier == Tier::Pro)
    }
}

impl QueueRecord for PendingOrder {
    const KIND: &'static str = "order";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn is_processed(&self) -> bool {
        self.processed
    }

    fn set_processed(&mut self, processed: bool) {
        self.processed = processed;
    }

    fn set_timestamp(&mut self, timestamp: String) {
        self.timestamp = timestamp;
    }
}
