//! Command dispatch for inbound chat messages.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use toolkit_core::ChatId;

use crate::commands::{self, Command, Reply};
use crate::directory::UserDirectory;
use crate::messenger::Messenger;
use crate::update::InboundMessage;

/// Routes a message to its command handler.
///
/// Handling never fails: directory and delivery errors are logged, and the
/// user is told about the ones that change what they asked for.
#[derive(Clone)]
pub struct Dispatcher {
    messenger: Arc<dyn Messenger>,
    directory: Arc<dyn UserDirectory>,
}

impl Dispatcher {
    pub fn new(messenger: Arc<dyn Messenger>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            messenger,
            directory,
        }
    }

    /// Handles one inbound message.
    pub async fn handle(&self, message: InboundMessage) {
        let chat_id = message.chat_id;
        let command = Command::parse(&message.text);
        info!(chat_id = %chat_id, command = %command, "Processing command");

        match command {
            Command::Start => self.handle_start(chat_id).await,
            Command::ToggleNotifications => self.handle_toggle(chat_id).await,
            other => {
                if let Command::Unrecognized(token) = &other {
                    debug!(chat_id = %chat_id, token = %token, "Command not recognized");
                }
                if let Some(reply) = other.static_reply() {
                    self.reply(chat_id, &reply).await;
                }
            }
        }
    }

    /// Registers the chat (or re-enables reminders), then sends the help text.
    ///
    /// Registration is best effort; the welcome goes out either way.
    async fn handle_start(&self, chat_id: ChatId) {
        match self.directory.find_by_chat_id(chat_id).await {
            None => match self.directory.create(chat_id).await {
                Ok(user) => info!(chat_id = %chat_id, id = %user.id, "Registered user"),
                Err(e) => error!(chat_id = %chat_id, error = %e, "Failed to register user"),
            },
            Some(user) if !user.notifications_enabled => {
                match self.directory.set_notifications(&user.id, true).await {
                    Ok(_) => info!(chat_id = %chat_id, id = %user.id, "Re-enabled reminders"),
                    Err(e) => {
                        error!(chat_id = %chat_id, id = %user.id, error = %e, "Failed to re-enable reminders")
                    }
                }
            }
            Some(_) => debug!(chat_id = %chat_id, "User already registered"),
        }

        self.reply(chat_id, &Reply::text(commands::WELCOME_TEXT)).await;
    }

    /// Flips the reminder flag of a registered user.
    ///
    /// Read-modify-write without any guard: two toggles racing from the same
    /// chat may both read the old value and one flip is lost.
    async fn handle_toggle(&self, chat_id: ChatId) {
        let Some(user) = self.directory.find_by_chat_id(chat_id).await else {
            self.reply(chat_id, &Reply::text(commands::NOT_REGISTERED_TEXT))
                .await;
            return;
        };

        let enabled = !user.notifications_enabled;
        let reply = match self.directory.set_notifications(&user.id, enabled).await {
            Ok(_) => {
                info!(chat_id = %chat_id, id = %user.id, enabled, "Toggled reminders");
                Reply::text(commands::toggle_confirmation(enabled))
            }
            Err(e) => {
                warn!(chat_id = %chat_id, id = %user.id, error = %e, "Failed to toggle reminders");
                Reply::text(commands::TOGGLE_FAILED_TEXT)
            }
        };
        self.reply(chat_id, &reply).await;
    }

    async fn reply(&self, chat_id: ChatId, reply: &Reply) {
        // Delivery failures are already logged by the messenger.
        let _ = match reply {
            Reply::Text(text) => self.messenger.send_text(chat_id, text).await,
            Reply::Photo { url, caption } => {
                self.messenger.send_photo(chat_id, url, caption).await
            }
        };
    }
}
