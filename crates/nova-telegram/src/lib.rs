// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram channel adapter for the NOVA sales bot.
//!
//! Implements [`ChannelAdapter`] for the Telegram Bot API via teloxide:
//! long polling for messages and inline button presses, MarkdownV2 output
//! with a plain-text fallback, splitting of over-long text, and the bot's
//! reply and inline keyboards.

pub mod handler;
pub mod keyboards;
pub mod markdown;
pub mod split;

use async_trait::async_trait;
use nova_config::TelegramConfig;
use nova_core::types::ChannelCapabilities;
use nova_core::{
    AdapterType, ChannelAdapter, Formatting, HealthStatus, InboundEvent, MessageId, NovaError,
    OutboundMessage, PluginAdapter,
};
use teloxide::dispatching::ShutdownToken;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyMarkup, WebAppInfo};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Telegram's limit for a single text message.
const MAX_MESSAGE_LENGTH: usize = 4096;

/// Telegram channel adapter implementing [`ChannelAdapter`].
pub struct TelegramChannel {
    bot: Bot,
    webapp: Option<WebAppInfo>,
    inbound_rx: tokio::sync::Mutex<mpsc::Receiver<InboundEvent>>,
    inbound_tx: mpsc::Sender<InboundEvent>,
    shutdown: Option<ShutdownToken>,
}

impl TelegramChannel {
    /// Creates a new Telegram channel adapter.
    ///
    /// Requires `config.bot_token`; `config.webapp_url` must parse as a URL
    /// when set.
    pub fn new(config: &TelegramConfig) -> Result<Self, NovaError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            NovaError::Config("telegram.bot_token is required for the Telegram adapter".into())
        })?;

        if token.trim().is_empty() {
            return Err(NovaError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        let webapp = match config.webapp_url.as_deref() {
            Some(url) => Some(WebAppInfo {
                url: url.parse().map_err(|e| {
                    NovaError::Config(format!("telegram.webapp_url is not a valid URL: {e}"))
                })?,
            }),
            None => None,
        };

        let (inbound_tx, inbound_rx) = mpsc::channel(100);

        Ok(Self {
            bot: Bot::new(token),
            webapp,
            inbound_rx: tokio::sync::Mutex::new(inbound_rx),
            inbound_tx,
            shutdown: None,
        })
    }

    fn send_error(e: teloxide::RequestError) -> NovaError {
        NovaError::Channel {
            message: format!("failed to send message: {e}"),
            source: Some(Box::new(e)),
        }
    }

    /// Send one piece, retrying as plain text when MarkdownV2 is rejected.
    async fn send_chunk(
        &self,
        chat_id: ChatId,
        text: &str,
        formatting: Formatting,
        markup: Option<ReplyMarkup>,
    ) -> Result<Message, NovaError> {
        match formatting {
            Formatting::Markdown => {
                let rendered = markdown::to_markdown_v2(text);
                match self
                    .send_text(chat_id, rendered, Some(ParseMode::MarkdownV2), markup.clone())
                    .await
                {
                    Ok(sent) => Ok(sent),
                    Err(e) => {
                        warn!(error = %e, "MarkdownV2 failed, sending as plain text");
                        self.send_text(chat_id, markdown::to_plain(text), None, markup)
                            .await
                            .map_err(Self::send_error)
                    }
                }
            }
            Formatting::Plain => self
                .send_text(chat_id, text.to_string(), None, markup)
                .await
                .map_err(Self::send_error),
        }
    }

    async fn send_text(
        &self,
        chat_id: ChatId,
        text: String,
        parse_mode: Option<ParseMode>,
        markup: Option<ReplyMarkup>,
    ) -> Result<Message, teloxide::RequestError> {
        let mut request = self.bot.send_message(chat_id, text);
        if let Some(mode) = parse_mode {
            request = request.parse_mode(mode);
        }
        if let Some(markup) = markup {
            request = request.reply_markup(markup);
        }
        request.await
    }
}

#[async_trait]
impl PluginAdapter for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Channel
    }

    async fn health_check(&self) -> Result<HealthStatus, NovaError> {
        match self.bot.get_me().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "Telegram bot unreachable: {e}"
            ))),
        }
    }

    async fn shutdown(&self) -> Result<(), NovaError> {
        debug!("Telegram channel shutting down");
        if let Some(token) = &self.shutdown {
            match token.shutdown() {
                Ok(stopped) => stopped.await,
                Err(_) => debug!("dispatcher was not running"),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ChannelAdapter for TelegramChannel {
    fn capabilities(&self) -> ChannelCapabilities {
        ChannelCapabilities {
            supports_keyboards: true,
            supports_web_app: self.webapp.is_some(),
            max_message_length: Some(MAX_MESSAGE_LENGTH),
        }
    }

    async fn connect(&mut self) -> Result<(), NovaError> {
        if self.shutdown.is_some() {
            return Ok(());
        }

        // Updates that arrived while the bot was down are dropped; the
        // durable queue covers anything the bot had already accepted.
        self.bot
            .delete_webhook()
            .drop_pending_updates(true)
            .await
            .map_err(|e| NovaError::Channel {
                message: format!("failed to reset webhook: {e}"),
                source: Some(Box::new(e)),
            })?;

        let message_tx = self.inbound_tx.clone();
        let callback_tx = self.inbound_tx.clone();

        let handler = dptree::entry()
            .branch(Update::filter_message().endpoint(move |msg: Message| {
                let tx = message_tx.clone();
                async move {
                    match handler::message_to_event(&msg) {
                        Some(event) => {
                            if tx.send(event).await.is_err() {
                                warn!("inbound channel closed, dropping message");
                            }
                        }
                        None => debug!(msg_id = msg.id.0, "ignoring unsupported message"),
                    }
                    respond(())
                }
            }))
            .branch(
                Update::filter_callback_query().endpoint(move |query: CallbackQuery| {
                    let tx = callback_tx.clone();
                    async move {
                        match handler::callback_to_event(&query) {
                            Some(event) => {
                                if tx.send(event).await.is_err() {
                                    warn!("inbound channel closed, dropping callback");
                                }
                            }
                            None => debug!("ignoring callback without data"),
                        }
                        respond(())
                    }
                }),
            );

        let mut dispatcher = Dispatcher::builder(self.bot.clone(), handler)
            .default_handler(|_| async {})
            .build();
        self.shutdown = Some(dispatcher.shutdown_token());

        info!("starting Telegram long polling");
        tokio::spawn(async move {
            dispatcher.dispatch().await;
        });
        Ok(())
    }

    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, NovaError> {
        let chat_id = ChatId(msg.chat_id);
        let mut markup = msg
            .keyboard
            .map(|kb| keyboards::markup(kb, self.webapp.as_ref()));

        let chunks = split::outbound_chunks(&msg.text, msg.formatting, MAX_MESSAGE_LENGTH);
        if chunks.len() > 1 {
            debug!(chat_id = msg.chat_id, parts = chunks.len(), "splitting long message");
        }

        let last = chunks.len().saturating_sub(1);
        let mut sent_id = None;
        for (i, chunk) in chunks.into_iter().enumerate() {
            // The keyboard rides on the final piece.
            let chunk_markup = if i == last { markup.take() } else { None };
            let sent = self
                .send_chunk(chat_id, chunk, msg.formatting, chunk_markup)
                .await?;
            sent_id = Some(sent.id);
        }

        sent_id
            .map(|id| MessageId(id.0.to_string()))
            .ok_or_else(|| NovaError::channel("nothing to send"))
    }

    async fn receive(&self) -> Result<InboundEvent, NovaError> {
        let mut rx = self.inbound_rx.lock().await;
        rx.recv()
            .await
            .ok_or_else(|| NovaError::channel("Telegram inbound channel closed"))
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), NovaError> {
        self.bot
            .answer_callback_query(teloxide::types::CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(|e| NovaError::Channel {
                message: format!("failed to answer callback: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(())
    }
}
