//! In-memory doubles for the messenger and the directory.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Barrier;

use toolkit_core::{ChatId, User, UserId};

use crate::commands::Reply;
use crate::directory::UserDirectory;
use crate::error::{Result, TelegramError};
use crate::messenger::Messenger;

/// Records every message; fails for chats listed in `failing`.
#[derive(Default)]
pub(crate) struct RecordingMessenger {
    sent: Mutex<Vec<(ChatId, Reply)>>,
    failing: HashSet<ChatId>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(chats: impl IntoIterator<Item = i64>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: chats.into_iter().map(ChatId).collect(),
        }
    }

    /// Every attempted send, successful or not.
    pub fn sent(&self) -> Vec<(ChatId, Reply)> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, chat_id: ChatId, reply: Reply) -> Result<()> {
        self.sent.lock().unwrap().push((chat_id, reply));
        if self.failing.contains(&chat_id) {
            return Err(TelegramError::Api("Forbidden: bot was blocked by the user".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.record(chat_id, Reply::text(text))
    }

    async fn send_photo(&self, chat_id: ChatId, photo_url: &str, caption: &str) -> Result<()> {
        self.record(chat_id, Reply::photo(photo_url, caption))
    }
}

/// A call made against [`MemoryDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DirectoryCall {
    Find(ChatId),
    Create(ChatId),
    SetNotifications(UserId, bool),
    List,
}

/// Directory kept in a vector, with switchable outages.
#[derive(Default)]
pub(crate) struct MemoryDirectory {
    users: Mutex<Vec<User>>,
    calls: Mutex<Vec<DirectoryCall>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryDirectory {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than lookups and listing.
    pub fn writes(&self) -> Vec<DirectoryCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, DirectoryCall::Create(_) | DirectoryCall::SetNotifications(..)))
            .collect()
    }

    fn log(&self, call: DirectoryCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn outage() -> TelegramError {
        TelegramError::DirectoryStatus {
            status: 503,
            body: "unavailable".into(),
        }
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_by_chat_id(&self, chat_id: ChatId) -> Option<User> {
        self.log(DirectoryCall::Find(chat_id));
        if self.fail_reads {
            return None;
        }
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.chat_id == chat_id)
            .cloned()
    }

    async fn create(&self, chat_id: ChatId) -> Result<User> {
        self.log(DirectoryCall::Create(chat_id));
        if self.fail_writes {
            return Err(Self::outage());
        }
        let mut users = self.users.lock().unwrap();
        let user = User::new((users.len() + 1).to_string(), chat_id.0, true);
        users.push(user.clone());
        Ok(user)
    }

    async fn set_notifications(&self, id: &UserId, enabled: bool) -> Result<User> {
        self.log(DirectoryCall::SetNotifications(id.clone(), enabled));
        if self.fail_writes {
            return Err(Self::outage());
        }
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| TelegramError::DirectoryStatus {
                status: 404,
                body: "Not found".into(),
            })?;
        user.notifications_enabled = enabled;
        Ok(user.clone())
    }

    async fn list(&self) -> Result<Vec<User>> {
        self.log(DirectoryCall::List);
        if self.fail_reads {
            return Err(Self::outage());
        }
        Ok(self.users())
    }
}

/// Wraps a [`MemoryDirectory`] so that lookups return only once `readers`
/// of them are in flight. Lets tests line up concurrent read-modify-writes.
pub(crate) struct GatedDirectory {
    inner: MemoryDirectory,
    gate: Barrier,
}

impl GatedDirectory {
    pub fn new(inner: MemoryDirectory, readers: usize) -> Self {
        Self {
            inner,
            gate: Barrier::new(readers),
        }
    }

    pub fn inner(&self) -> &MemoryDirectory {
        &self.inner
    }
}

#[async_trait]
impl UserDirectory for GatedDirectory {
    async fn find_by_chat_id(&self, chat_id: ChatId) -> Option<User> {
        let user = self.inner.find_by_chat_id(chat_id).await;
        self.gate.wait().await;
        user
    }

    async fn create(&self, chat_id: ChatId) -> Result<User> {
        self.inner.create(chat_id).await
    }

    async fn set_notifications(&self, id: &UserId, enabled: bool) -> Result<User> {
        self.inner.set_notifications(id, enabled).await
    }

    async fn list(&self) -> Result<Vec<User>> {
        self.inner.list().await
    }
}
