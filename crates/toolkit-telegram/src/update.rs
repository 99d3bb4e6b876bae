//! Webhook payload decoding.
//!
//! Only `message.chat.id` and `message.text` are read; everything else in the
//! update is ignored so that new Bot API fields never break decoding.

use serde::Deserialize;
use tracing::debug;

use toolkit_core::ChatId;

/// A text message addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub text: String,
}

impl InboundMessage {
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id: ChatId(chat_id),
            text: text.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WebhookUpdate {
    #[serde(default)]
    update_id: Option<i64>,
    #[serde(default)]
    message: Option<WebhookMessage>,
}

#[derive(Debug, Deserialize)]
struct WebhookMessage {
    chat: WebhookChat,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WebhookChat {
    id: ChatId,
}

/// Extracts the text message from a raw webhook body.
///
/// Returns `None` for anything that is not a non-empty text message,
/// including bodies that are not valid JSON.
pub fn parse_update(body: &[u8]) -> Option<InboundMessage> {
    let update: WebhookUpdate = match serde_json::from_slice(body) {
        Ok(update) => update,
        Err(e) => {
            debug!(error = %e, "Undecodable webhook body");
            return None;
        }
    };

    let Some(message) = update.message else {
        debug!(update_id = ?update.update_id, "Update without message");
        return None;
    };

    match message.text {
        // Blank text still gets the fallback reply.
        Some(text) if !text.is_empty() => Some(InboundMessage {
            chat_id: message.chat.id,
            text,
        }),
        _ => {
            debug!(update_id = ?update.update_id, chat_id = %message.chat.id, "Message without text");
            None
        }
    }
}
