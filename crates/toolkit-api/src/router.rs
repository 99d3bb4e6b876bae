//! Router configuration and server setup.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Health
        .route("/api/health", get(handlers::health))
        // Telegram
        .route("/api/telegram/webhook", post(handlers::telegram_webhook))
        .route("/api/telegram/cron", get(handlers::telegram_cron))
        // Catalog
        .route("/api/tools", get(handlers::list_tools))
        // Apply middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Starts the API server.
pub async fn serve(state: AppState) -> Result<(), std::io::Error> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::json;
    use toolkit_core::Config;
    use wiremock::MockServer;

    fn make_test_state(upstream: &MockServer, config: ServerConfig) -> AppState {
        let uri = upstream.uri();
        let bot_config = Config::from_lookup(|name| match name {
            "TELEGRAM_BOT_TOKEN" => Some("123456:TEST".to_string()),
            "DIRECTORY_API_URL" => Some(format!("{}/api/v1", uri)),
            "TELEGRAM_API_URL" => Some(uri.clone()),
            _ => None,
        })
        .unwrap();
        AppState::from_config(config, bot_config).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let upstream = MockServer::start().await;
        let app = create_router(make_test_state(&upstream, ServerConfig::default()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tools_endpoint() {
        let upstream = MockServer::start().await;
        let app = create_router(make_test_state(&upstream, ServerConfig::default()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/tools").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["total"], 40);
        assert_eq!(body["categories"][0]["id"], "development");

        let response = server.get("/api/tools?category=marketing").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["total"], 8);
        assert_eq!(body["categories"][0]["name"], "Marketing");
    }

    #[tokio::test]
    async fn test_tools_bad_category() {
        let upstream = MockServer::start().await;
        let app = create_router(make_test_state(&upstream, ServerConfig::default()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/tools?category=games").await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_webhook_acknowledges_non_text_update() {
        let upstream = MockServer::start().await;
        let app = create_router(make_test_state(&upstream, ServerConfig::default()));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/telegram/webhook")
            .json(&json!({ "update_id": 1, "edited_message": { "chat": { "id": 1 } } }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
        assert!(upstream.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_webhook_acknowledges_garbage() {
        let upstream = MockServer::start().await;
        let app = create_router(make_test_state(&upstream, ServerConfig::default()));
        let server = TestServer::new(app).unwrap();

        let response = server.post("/api/telegram/webhook").text("{not json").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_cron_without_target_chat() {
        let upstream = MockServer::start().await;
        let app = create_router(make_test_state(&upstream, ServerConfig::default()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/telegram/cron").await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({
            "status": "error",
            "message": "Target chat ID not configured."
        }));
        assert!(upstream.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let upstream = MockServer::start().await;
        let app = create_router(make_test_state(&upstream, ServerConfig::default()));
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/health")
            .add_header(
                axum::http::header::ORIGIN,
                HeaderValue::from_static("https://example.com"),
            )
            .await;

        assert!(response.headers().contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_cors_restricted_origins() {
        let upstream = MockServer::start().await;
        let config = ServerConfig::default()
            .with_cors_origins(vec!["https://tool-kit-one.vercel.app".to_string()]);
        let app = create_router(make_test_state(&upstream, config));
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/tools")
            .add_header(
                axum::http::header::ORIGIN,
                HeaderValue::from_static("https://elsewhere.example"),
            )
            .await;

        assert!(!response.headers().contains_key("access-control-allow-origin"));
    }
}
