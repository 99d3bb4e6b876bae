//! Outbound messages through the Telegram Bot API.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::InputFile;
use tracing::{debug, warn};
use url::Url;

use toolkit_core::{ChatId, Config};

use crate::error::Result;

/// Sends messages to a chat.
///
/// Implementations log their own failures; the returned error only tells the
/// caller whether the message went out.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends a plain text message.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;

    /// Sends a photo by URL with a caption.
    async fn send_photo(&self, chat_id: ChatId, photo_url: &str, caption: &str) -> Result<()>;
}

/// [`Messenger`] backed by a teloxide [`Bot`].
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    /// Creates a messenger from the bot token (and API URL override) in `config`.
    pub fn new(config: &Config) -> Self {
        let mut bot = Bot::new(&config.bot_token);
        if let Some(api_url) = &config.telegram_api_url {
            bot = bot.set_api_url(api_url.clone());
        }
        Self { bot }
    }

    /// Wraps an existing bot.
    pub fn from_bot(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        match self
            .bot
            .send_message(teloxide::types::ChatId(chat_id.0), text)
            .await
        {
            Ok(sent) => {
                debug!(chat_id = %chat_id, message_id = sent.id.0, "sendMessage ok");
                Ok(())
            }
            Err(e) => {
                warn!(chat_id = %chat_id, error = %e, "sendMessage failed");
                Err(e.into())
            }
        }
    }

    async fn send_photo(&self, chat_id: ChatId, photo_url: &str, caption: &str) -> Result<()> {
        let url = Url::parse(photo_url).map_err(|e| {
            warn!(chat_id = %chat_id, url = photo_url, error = %e, "Invalid photo URL");
            e
        })?;

        match self
            .bot
            .send_photo(teloxide::types::ChatId(chat_id.0), InputFile::url(url))
            .caption(caption)
            .await
        {
            Ok(sent) => {
                debug!(chat_id = %chat_id, message_id = sent.id.0, "sendPhoto ok");
                Ok(())
            }
            Err(e) => {
                warn!(chat_id = %chat_id, error = %e, "sendPhoto failed");
                Err(e.into())
            }
        }
    }
}
