//! Shared building blocks for the Toolkit bot.
//!
//! - [`config`]: process configuration loaded once at startup
//! - [`models`]: the user record kept in the directory store
//! - [`catalog`]: the static list of tools shown on the dashboard

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use catalog::{Category, Tool};
pub use config::Config;
pub use error::{ConfigError, Result};
pub use models::{ChatId, User, UserId};
