//! Process configuration.
//!
//! Everything the bot needs from the environment is read once, at startup,
//! into a [`Config`] that is then handed to the clients that need it.
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN`: Bot token from @BotFather
//! - `DIRECTORY_API_URL`: Base URL of the user directory store (the `/users`
//!   resource lives under it)
//!
//! Optional:
//! - `TELEGRAM_CHAT_ID`: Operator chat; the scheduled endpoint refuses to run
//!   without it
//! - `TELEGRAM_API_URL`: Bot API base URL override (default: api.telegram.org)

use std::fmt;

use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};
use crate::models::ChatId;

/// Environment variable for the bot token.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable for the operator chat.
pub const TARGET_CHAT_ENV: &str = "TELEGRAM_CHAT_ID";

/// Environment variable for the directory store base URL.
pub const DIRECTORY_URL_ENV: &str = "DIRECTORY_API_URL";

/// Environment variable for the Bot API base URL override.
pub const TELEGRAM_API_URL_ENV: &str = "TELEGRAM_API_URL";

/// Loads `.env.local`, falling back to `.env`, into the process environment.
///
/// Missing files are not an error.
pub fn load_env_files() {
    match dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv()) {
        Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
        Err(e) => debug!(error = %e, "No environment file loaded"),
    }
}

/// Validated bot configuration.
#[derive(Clone)]
pub struct Config {
    /// Telegram bot token.
    pub bot_token: String,
    /// Operator chat that receives the scheduled summary.
    pub target_chat_id: Option<ChatId>,
    /// Base URL of the user directory store.
    pub directory_url: Url,
    /// Bot API base URL override.
    pub telegram_api_url: Option<Url>,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = get(BOT_TOKEN_ENV).ok_or(ConfigError::Missing(BOT_TOKEN_ENV))?;

        let directory_url = get(DIRECTORY_URL_ENV)
            .ok_or(ConfigError::Missing(DIRECTORY_URL_ENV))
            .and_then(|raw| parse_url(DIRECTORY_URL_ENV, &raw))?;

        let target_chat_id = get(TARGET_CHAT_ENV)
            .map(|raw| {
                raw.parse::<i64>()
                    .map(ChatId)
                    .map_err(|e| ConfigError::Invalid {
                        name: TARGET_CHAT_ENV,
                        reason: e.to_string(),
                    })
            })
            .transpose()?;

        let telegram_api_url = get(TELEGRAM_API_URL_ENV)
            .map(|raw| parse_url(TELEGRAM_API_URL_ENV, &raw))
            .transpose()?;

        Ok(Self {
            bot_token,
            target_chat_id,
            directory_url,
            telegram_api_url,
        })
    }

    /// Returns the operator chat or the error the scheduled endpoint reports.
    pub fn require_target_chat(&self) -> Result<ChatId> {
        self.target_chat_id
            .ok_or(ConfigError::Missing(TARGET_CHAT_ENV))
    }
}

// Keeps the token out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("target_chat_id", &self.target_chat_id)
            .field("directory_url", &self.directory_url.as_str())
            .field(
                "telegram_api_url",
                &self.telegram_api_url.as_ref().map(Url::as_str),
            )
            .finish()
    }
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url> {
    // Relative joins drop the last path segment unless it ends with '/'.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
