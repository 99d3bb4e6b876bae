//! Error types for the Telegram side of the bot.

use thiserror::Error;

/// Errors that can occur while talking to Telegram or the directory store.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The Bot API rejected or failed a request.
    #[error("Telegram API error: {0}")]
    Api(String),

    /// The directory store answered with a non-success status.
    #[error("Directory returned {status}: {body}")]
    DirectoryStatus { status: u16, body: String },

    /// A URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for Telegram operations.
pub type Result<T> = std::result::Result<T, TelegramError>;

impl From<reqwest::Error> for TelegramError {
    fn from(e: reqwest::Error) -> Self {
        TelegramError::HttpError(e.to_string())
    }
}

impl From<teloxide::RequestError> for TelegramError {
    fn from(e: teloxide::RequestError) -> Self {
        TelegramError::Api(e.to_string())
    }
}

impl From<url::ParseError> for TelegramError {
    fn from(e: url::ParseError) -> Self {
        TelegramError::InvalidUrl(e.to_string())
    }
}
