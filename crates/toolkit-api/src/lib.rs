//! HTTP surface of the Toolkit bot.
//!
//! Routes:
//! - `POST /api/telegram/webhook` - Telegram updates; always acknowledged
//! - `GET /api/telegram/cron` - Reminder broadcast, called by an external scheduler
//! - `GET /api/tools` - Tool catalog (optionally `?category=<id>`)
//! - `GET /api/health` - Liveness probe
//!
//! # Example
//!
//! ```no_run
//! use toolkit_api::{serve, AppState, ServerConfig};
//! use toolkit_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::from_config(ServerConfig::default(), Config::from_env()?)?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ServerConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
