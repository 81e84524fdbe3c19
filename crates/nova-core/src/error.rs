// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by every NOVA crate.

use thiserror::Error;

/// The primary error type used across the bot's adapters and handlers.
#[derive(Debug, Error)]
pub enum NovaError {
    /// Configuration errors (missing token, invalid admin id, bad paths).
    #[error("configuration error: {0}")]
    Config(String),

    /// Queue file errors (read, parse, write, rename).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Channel adapter errors (send failure, closed inbound stream).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A mini-app payload that could not be decoded or has an unknown type.
    #[error("malformed payload: {0}")]
    Payload(String),

    /// An admin reply whose quoted notification does not identify a user.
    #[error("correlation failed: {0}")]
    Correlation(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl NovaError {
    /// Wraps any error as a storage failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        NovaError::Storage {
            source: Box::new(err),
        }
    }

    /// Builds a channel error without an underlying source.
    pub fn channel(message: impl Into<String>) -> Self {
        NovaError::Channel {
            message: message.into(),
            source: None,
        }
    }

    /// True when the channel reports its inbound stream is gone for good.
    pub fn is_channel_closed(&self) -> bool {
        matches!(self, NovaError::Channel { message, .. } if message.contains("closed"))
    }
}
