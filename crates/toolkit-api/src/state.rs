//! Application state shared across handlers.

use std::sync::Arc;

use toolkit_core::Config;
use toolkit_telegram::BotServices;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Bot configuration loaded at startup.
    pub bot_config: Arc<Config>,
    /// Telegram and directory clients with their handlers.
    pub services: BotServices,
}

impl AppState {
    /// Creates the state around already built services.
    pub fn new(config: ServerConfig, bot_config: Config, services: BotServices) -> Self {
        Self {
            config: Arc::new(config),
            bot_config: Arc::new(bot_config),
            services,
        }
    }

    /// Creates the state, building the HTTP clients from `bot_config`.
    pub fn from_config(config: ServerConfig, bot_config: Config) -> toolkit_telegram::Result<Self> {
        let services = BotServices::from_config(&bot_config)?;
        Ok(Self::new(config, bot_config, services))
    }
}
