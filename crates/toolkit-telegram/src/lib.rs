//! Telegram side of the Toolkit bot.
//!
//! This crate turns webhook updates into replies and runs the scheduled
//! reminder broadcast:
//!
//! - [`Dispatcher`]: parses the command of an inbound message and answers it
//! - [`Broadcaster`]: sends the reminder to every user who opted in
//! - [`TelegramMessenger`]: outbound messages through the Bot API
//! - [`HttpUserDirectory`]: user records in the remote directory store
//!
//! # Commands
//!
//! - `/start` - Register and show help
//! - `/command1` - Material request form link
//! - `/command2` - Google Maps link
//! - `/command3` - QR code image
//! - `/command4` - Tools dashboard link
//! - `/command5` - Turn reminders on or off
//!
//! # Example
//!
//! ```no_run
//! use toolkit_core::Config;
//! use toolkit_telegram::{parse_update, BotServices};
//!
//! # async fn run(body: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
//! let services = BotServices::from_config(&Config::from_env()?)?;
//! if let Some(message) = parse_update(body) {
//!     services.dispatcher.handle(message).await;
//! }
//! # Ok(())
//! # }
//! ```

pub mod broadcaster;
pub mod commands;
pub mod directory;
pub mod dispatcher;
pub mod error;
pub mod messenger;
pub mod update;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use toolkit_core::Config;

pub use broadcaster::{BroadcastSummary, Broadcaster};
pub use commands::{Command, Reply};
pub use directory::{HttpUserDirectory, UserDirectory};
pub use dispatcher::Dispatcher;
pub use error::{Result, TelegramError};
pub use messenger::{Messenger, TelegramMessenger};
pub use update::{parse_update, InboundMessage};

/// The clients and handlers wired from one [`Config`].
#[derive(Clone)]
pub struct BotServices {
    pub messenger: Arc<dyn Messenger>,
    pub directory: Arc<dyn UserDirectory>,
    pub dispatcher: Dispatcher,
    pub broadcaster: Broadcaster,
}

impl BotServices {
    /// Builds the Bot API and directory clients from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(config));
        let directory: Arc<dyn UserDirectory> = Arc::new(HttpUserDirectory::new(config)?);
        Ok(Self::new(messenger, directory))
    }

    /// Wires handlers around existing clients.
    pub fn new(messenger: Arc<dyn Messenger>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            dispatcher: Dispatcher::new(messenger.clone(), directory.clone()),
            broadcaster: Broadcaster::new(messenger.clone(), directory.clone()),
            messenger,
            directory,
        }
    }
}
