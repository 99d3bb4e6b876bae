//! User records kept in the directory store.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Telegram chat identifier.
///
/// The directory store does not enforce a column type, so records created by
/// hand may carry the id as a JSON string. Both forms are accepted on read;
/// it is always written back as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for ChatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(Self(n)),
            NumberOrString::String(s) => s
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid chat id: {:?}", s))),
        }
    }
}

/// Opaque record identifier issued by the directory store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Self(n.to_string()),
            NumberOrString::String(s) => Self(s),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

/// A bot user as stored in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-issued identifier.
    pub id: UserId,
    /// Chat the user talks to the bot from.
    pub chat_id: ChatId,
    /// Whether the user receives the scheduled reminder.
    #[serde(default)]
    pub notifications_enabled: bool,
}

impl User {
    /// Creates a user record value (used by tests and in-memory stores).
    pub fn new(id: impl Into<UserId>, chat_id: i64, notifications_enabled: bool) -> Self {
        Self {
            id: id.into(),
            chat_id: ChatId(chat_id),
            notifications_enabled,
        }
    }
}
