//! Telegram webhook and scheduled reminder handlers.

use axum::{body::Bytes, extract::State, Json};
use tracing::{debug, error, info, warn};

use toolkit_telegram::parse_update;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{AckResponse, CronResponse};

/// POST /api/telegram/webhook - Handle a Telegram update.
///
/// Always answers `{"status":"ok"}`; Telegram redelivers anything else.
pub async fn telegram_webhook(State(state): State<AppState>, body: Bytes) -> Json<AckResponse> {
    debug!(bytes = body.len(), "Webhook received a request");

    match parse_update(&body) {
        Some(message) => state.services.dispatcher.handle(message).await,
        None => debug!("Not a text message update, ignoring"),
    }

    Json(AckResponse::ok())
}

/// GET /api/telegram/cron - Send the reminder to every opted-in user.
///
/// The operator chat gets a one-line report once the batch settles.
pub async fn telegram_cron(State(state): State<AppState>) -> Result<Json<CronResponse>> {
    let operator_chat = state.bot_config.require_target_chat().map_err(|e| {
        error!(error = %e, "CRON: cannot send scheduled message");
        ApiError::Configuration("Target chat ID not configured.".to_string())
    })?;

    let summary = state.services.broadcaster.run().await.map_err(|e| {
        error!(error = %e, "CRON: failed to list users");
        ApiError::Upstream("Failed to load users from the directory.".to_string())
    })?;

    match state
        .services
        .messenger
        .send_text(operator_chat, &summary.report())
        .await
    {
        Ok(()) => debug!(chat_id = %operator_chat, "CRON: report delivered"),
        Err(e) => {
            warn!(chat_id = %operator_chat, error = %e, "CRON: report not delivered")
        }
    }

    info!(
        total = summary.total,
        sent = summary.sent,
        failed = summary.failed,
        "CRON: scheduled message sent"
    );
    Ok(Json(CronResponse::from(summary)))
}
