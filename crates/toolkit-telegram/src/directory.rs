//! User directory client.
//!
//! The store exposes a mockapi.io style `/users` resource:
//!
//! | operation          | request                        |
//! |--------------------|--------------------------------|
//! | filter by chat     | `GET /users?chatId=<id>`       |
//! | list               | `GET /users`                   |
//! | create             | `POST /users`                  |
//! | update one field   | `PUT /users/<id>`              |
//!
//! Reads by chat degrade to "absent" on any failure. Writes and listing
//! return their errors, since callers have to tell someone about them.
//! Records in a collection that do not decode as a [`User`] are skipped with
//! a warning; one hand-edited row must not hide the others.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use toolkit_core::{ChatId, Config, User, UserId};

use crate::error::{Result, TelegramError};

/// Access to stored users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up the user for a chat. Failures are logged and read as absent.
    async fn find_by_chat_id(&self, chat_id: ChatId) -> Option<User>;

    /// Creates a user with notifications enabled.
    async fn create(&self, chat_id: ChatId) -> Result<User>;

    /// Sets the notification flag of a user.
    async fn set_notifications(&self, id: &UserId, enabled: bool) -> Result<User>;

    /// Lists every stored user.
    async fn list(&self) -> Result<Vec<User>>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewUser {
    chat_id: ChatId,
    notifications_enabled: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationsUpdate {
    notifications_enabled: bool,
}

/// [`UserDirectory`] over HTTP.
#[derive(Clone)]
pub struct HttpUserDirectory {
    client: reqwest::Client,
    users_url: Url,
}

impl HttpUserDirectory {
    /// Creates a client for the store configured in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config.directory_url.clone())
    }

    /// Creates a client for the store rooted at `base_url`.
    pub fn with_base_url(base_url: Url) -> Result<Self> {
        let users_url = base_url.join("users")?;
        Ok(Self {
            client: reqwest::Client::new(),
            users_url,
        })
    }

    /// Returns the collection URL.
    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    fn user_url(&self, id: &UserId) -> Result<Url> {
        let mut url = self.users_url.clone();
        url.path_segments_mut()
            .map_err(|_| TelegramError::InvalidUrl(self.users_url.to_string()))?
            .push(id.as_str());
        Ok(url)
    }

    async fn query_by_chat_id(&self, chat_id: ChatId) -> Result<Vec<User>> {
        let response = self
            .client
            .get(self.users_url.clone())
            .query(&[("chatId", chat_id.to_string())])
            .send()
            .await?;

        // The store answers an empty filter with 404 instead of [].
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let users = decode_users(check_status(response).await?).await?;
        // Filters are substring matches on the store side.
        Ok(users.into_iter().filter(|u| u.chat_id == chat_id).collect())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(TelegramError::DirectoryStatus {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

async fn decode_users(response: reqwest::Response) -> Result<Vec<User>> {
    let records: Vec<serde_json::Value> = decode(response).await?;
    let total = records.len();
    let users: Vec<User> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<User>(record.clone()) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(record = %record, error = %e, "Skipping malformed user record");
                None
            }
        })
        .collect();
    if users.len() < total {
        debug!(total, kept = users.len(), "Dropped malformed user records");
    }
    Ok(users)
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn find_by_chat_id(&self, chat_id: ChatId) -> Option<User> {
        match self.query_by_chat_id(chat_id).await {
            Ok(users) => {
                if users.len() > 1 {
                    warn!(chat_id = %chat_id, count = users.len(), "Duplicate user records, using the first");
                }
                users.into_iter().next()
            }
            Err(e) => {
                warn!(chat_id = %chat_id, error = %e, "User lookup failed, treating as absent");
                None
            }
        }
    }

    async fn create(&self, chat_id: ChatId) -> Result<User> {
        let response = self
            .client
            .post(self.users_url.clone())
            .json(&NewUser {
                chat_id,
                notifications_enabled: true,
            })
            .send()
            .await?;

        let user: User = decode(check_status(response).await?).await?;
        debug!(chat_id = %chat_id, id = %user.id, "Created user");
        Ok(user)
    }

    async fn set_notifications(&self, id: &UserId, enabled: bool) -> Result<User> {
        let response = self
            .client
            .put(self.user_url(id)?)
            .json(&NotificationsUpdate {
                notifications_enabled: enabled,
            })
            .send()
            .await?;

        let user: User = decode(check_status(response).await?).await?;
        debug!(id = %id, enabled, "Updated notifications");
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>> {
        let response = self.client.get(self.users_url.clone()).send().await?;
        let users = decode_users(check_status(response).await?).await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }
}
