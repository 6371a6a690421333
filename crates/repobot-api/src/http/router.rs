//! Axum router configuration with middleware.
//!
//! Routes:
//! - `POST {webhook_path}`: Telegram updates (default `/webhook/telegram`)
//! - `GET /health`: liveness probe
//!
//! Middleware: request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, webhook_path: &str) -> Router {
    Router::new()
        .route(webhook_path, post(handlers::webhook::receive_update))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use httpmock::prelude::*;
    use repobot_types::config::BotConfig;
    use secrecy::SecretString;
    use serde_json::json;
    use tower::ServiceExt;

    const WEBHOOK: &str = "/webhook/telegram";
    const SEND_PATH: &str = "/bottest-token/sendMessage";

    /// Config pointing both clients at the mock servers.
    fn config(github: &MockServer, telegram: &MockServer) -> BotConfig {
        let mut config = BotConfig::default();
        config.github.api_base_url = github.base_url();
        config.telegram.api_base_url = telegram.base_url();
        config.trending.seed = Some(7);
        config
    }

    fn app(config: &BotConfig) -> Router {
        let state =
            AppState::from_parts(config, SecretString::from("test-token"), None).unwrap();
        build_router(state, &config.server.webhook_path)
    }

    fn update(text: &str, chat_id: i64) -> Request<Body> {
        let body = json!({
            "update_id": 1,
            "message": {"message_id": 1, "text": text, "chat": {"id": chat_id, "type": "private"}}
        });
        Request::builder()
            .method("POST")
            .uri(WEBHOOK)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn repo_item(name: &str) -> serde_json::Value {
        json!({
            "full_name": format!("owner/{name}"),
            "description": format!("{name} does things"),
            "owner": {"login": "owner"},
            "stargazers_count": 42,
            "html_url": format!("https://github.com/owner/{name}")
        })
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        let response = app(&config(&github, &telegram))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn search_update_delivers_one_message() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        let search = github.mock(|when, then| {
            when.method(GET)
                .path("/search/repositories")
                .query_param("q", "dblab in:name");
            then.status(200)
                .json_body(json!({"total_count": 1, "items": [repo_item("dblab")]}));
        });
        let send = telegram.mock(|when, then| {
            when.method(POST)
                .path(SEND_PATH)
                .body_includes("chat_id=42")
                .body_includes("dblab");
            then.status(200)
                .json_body(json!({"ok": true, "result": {"message_id": 9}}));
        });

        let response = app(&config(&github, &telegram))
            .oneshot(update("/search dblab", 42))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "");
        search.assert();
        send.assert_calls(1);
    }

    #[tokio::test]
    async fn trend_update_delivers_capped_batch() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        let items: Vec<_> = (0..8).map(|i| repo_item(&format!("repo{i}"))).collect();
        github.mock(|when, then| {
            when.method(GET)
                .path("/search/repositories")
                .query_param("sort", "stars");
            then.status(200)
                .json_body(json!({"total_count": 8, "items": items}));
        });
        let send = telegram.mock(|when, then| {
            when.method(POST).path(SEND_PATH).body_includes("chat_id=5");
            then.status(200)
                .json_body(json!({"ok": true, "result": {"message_id": 1}}));
        });

        let response = app(&config(&github, &telegram))
            .oneshot(update("/trend golang", 5))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "");
        send.assert_calls(5);
    }

    #[tokio::test]
    async fn unknown_command_touches_nothing() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        let search = github.mock(|when, then| {
            when.method(GET).path("/search/repositories");
            then.status(500);
        });
        let send = telegram.mock(|when, then| {
            when.method(POST).path(SEND_PATH);
            then.status(500);
        });

        let response = app(&config(&github, &telegram))
            .oneshot(update("/unknown foo", 1))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "");
        search.assert_calls(0);
        send.assert_calls(0);
    }

    #[tokio::test]
    async fn invalid_search_answers_with_diagnostic() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        let notice = telegram.mock(|when, then| {
            when.method(POST)
                .path(SEND_PATH)
                .body_includes("repo+not+found");
            then.status(200)
                .json_body(json!({"ok": true, "result": {"message_id": 1}}));
        });

        let response = app(&config(&github, &telegram))
            .oneshot(update("/search", 3))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "invalid input /search with error repo not found in /search"
        );
        notice.assert_calls(1);
    }

    #[tokio::test]
    async fn empty_trending_answers_with_diagnostic() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        github.mock(|when, then| {
            when.method(GET).path("/search/repositories");
            then.status(200).json_body(json!({"total_count": 0, "items": []}));
        });
        telegram.mock(|when, then| {
            when.method(POST).path(SEND_PATH);
            then.status(200)
                .json_body(json!({"ok": true, "result": {"message_id": 1}}));
        });

        let response = app(&config(&github, &telegram))
            .oneshot(update("/trend", 3))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "an error has occurred, there are not trending repos yet for today, try again later!"
        );
    }

    #[tokio::test]
    async fn malformed_json_is_acknowledged() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        let request = Request::builder()
            .method("POST")
            .uri(WEBHOOK)
            .body(Body::from("{not json"))
            .unwrap();

        let response = app(&config(&github, &telegram))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn wrong_secret_token_is_rejected() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        let mut config = config(&github, &telegram);
        config.telegram.webhook_secret = Some("s3cret".to_string());
        let app = app(&config);

        let mut request = update("/search dblab", 1);
        request
            .headers_mut()
            .insert("x-telegram-bot-api-secret-token", "wrong".parse().unwrap());
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.oneshot(update("/search dblab", 1)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn matching_secret_token_is_accepted() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        let mut config = config(&github, &telegram);
        config.telegram.webhook_secret = Some("s3cret".to_string());

        let mut request = update("hello", 1);
        request
            .headers_mut()
            .insert("x-telegram-bot-api-secret-token", "s3cret".parse().unwrap());
        let response = app(&config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn custom_webhook_path_is_routed() {
        let github = MockServer::start();
        let telegram = MockServer::start();
        let mut config = config(&github, &telegram);
        config.server.webhook_path = "/hooks/tg".to_string();

        let request = Request::builder()
            .method("POST")
            .uri("/hooks/tg")
            .body(Body::from(r#"{"update_id": 3}"#))
            .unwrap();
        let response = app(&config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(&config).oneshot(update("/trend", 1)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
