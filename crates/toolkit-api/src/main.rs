//! Toolkit bot server binary.
//!
//! Start the server with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx DIRECTORY_API_URL=https://<id>.mockapi.io/api/v1 cargo run -p toolkit-api
//! ```

use clap::Parser;
use toolkit_api::{serve, AppState, ServerConfig};
use toolkit_core::config::{self, Config};
use tracing_subscriber::EnvFilter;

/// Toolkit bot - Telegram webhook, scheduled reminders and tool catalog
#[derive(Parser, Debug)]
#[command(name = "toolkit-bot")]
#[command(about = "Telegram webhook and reminder server for the Toolkit dashboard")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "TOOLKIT_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(short, long, env = "TOOLKIT_PORT", default_value = "3000")]
    port: u16,

    /// Allowed CORS origins (comma separated, `*` for any)
    #[arg(long, env = "TOOLKIT_CORS_ORIGINS", value_delimiter = ',', default_value = "*")]
    cors_origins: Vec<String>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Environment files first so clap's `env` fallbacks see them
    config::load_env_files();

    let args = Args::parse();

    let filter = match args.verbose {
        0 => "toolkit_api=info,toolkit_telegram=info,tower_http=warn",
        1 => "toolkit_api=debug,toolkit_telegram=debug,tower_http=info",
        2 => "toolkit_api=trace,toolkit_telegram=trace,toolkit_core=trace,tower_http=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let bot_config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "CRITICAL: invalid configuration");
            return Err(e.into());
        }
    };

    if bot_config.target_chat_id.is_none() {
        tracing::warn!("TELEGRAM_CHAT_ID not set; the scheduled endpoint will refuse to run");
    }
    tracing::debug!(config = ?bot_config, "Configuration loaded");

    let server_config = ServerConfig::new(args.host, args.port).with_cors_origins(args.cors_origins);
    let state = AppState::from_config(server_config, bot_config)?;

    serve(state).await?;
    Ok(())
}
