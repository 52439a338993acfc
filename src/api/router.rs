use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::middleware::{cors_layer, logging_middleware, metrics_middleware};
use super::state::AppState;
use super::{chat, feedback, health};
use crate::config::AppConfig;
use crate::domain::DomainError;

/// Create the router with relay, feedback and health endpoints
pub fn create_router(state: AppState, config: &AppConfig) -> Result<Router, DomainError> {
    let cors = cors_layer(&config.cors)?;

    Ok(Router::new()
        .route("/chat", post(chat::relay))
        .route("/feedback", post(feedback::submit_feedback))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use http_body_util::BodyExt;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{header as header_eq, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::middleware::logging::REQUEST_ID_HEADER;
    use crate::domain::llm::CANNED_REPLIES;
    use crate::domain::LatencyWindow;
    use crate::infrastructure::credentials::StaticCredentialProvider;
    use crate::infrastructure::feedback::FileFeedbackStore;
    use crate::infrastructure::llm::{HttpClient, MockChatProvider, ProviderAdapter};

    fn app(
        config: &AppConfig,
        credentials: StaticCredentialProvider,
        feedback_dir: &std::path::Path,
    ) -> Router {
        let adapter = ProviderAdapter::new(HttpClient::new(), Arc::new(credentials))
            .with_config(&config.providers)
            .with_mock(MockChatProvider::new(LatencyWindow::none()));
        let state = AppState::new(
            Arc::new(adapter),
            Arc::new(FileFeedbackStore::new(feedback_dir)),
        );

        create_router(state, config).unwrap()
    }

    fn config_with_upstream(server: &MockServer) -> AppConfig {
        let mut config = AppConfig::default();
        config.providers.endpoints.insert(
            "openai".to_string(),
            format!("{}/v1/chat/completions", server.uri()),
        );
        config.providers.endpoints.insert(
            "anthropic".to_string(),
            format!("{}/v1/complete", server.uri()),
        );
        config
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_mock_returns_canned_reply() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&AppConfig::default(), StaticCredentialProvider::new(), dir.path());

        let response = app
            .oneshot(post_json(
                "/chat",
                json!({"messages": [{"role": "user", "content": "hi"}], "llm_choice": "mock"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        let reply = body["response"].as_str().unwrap();
        assert!(CANNED_REPLIES.contains(&reply));
    }

    #[tokio::test]
    async fn test_chat_openai_relays_upstream_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header_eq("authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Hello from upstream"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = config_with_upstream(&server);
        let app = app(
            &config,
            StaticCredentialProvider::new().with_key("openai", "sk-test"),
            dir.path(),
        );

        let response = app
            .oneshot(post_json(
                "/chat",
                json!({"messages": [{"role": "user", "content": "hi"}], "llm_choice": "openai"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"response": "Hello from upstream"}));
    }

    #[tokio::test]
    async fn test_chat_anthropic_relays_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/complete"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"completion": " Sure thing."})),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = config_with_upstream(&server);
        let app = app(
            &config,
            StaticCredentialProvider::new().with_key("anthropic", "ak-test"),
            dir.path(),
        );

        let response = app
            .oneshot(post_json(
                "/chat",
                json!({"messages": [{"role": "user", "content": "hi"}], "llm_choice": "anthropic"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["response"], " Sure thing.");
    }

    #[tokio::test]
    async fn test_chat_upstream_failure_is_500() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = config_with_upstream(&server);
        let app = app(
            &config,
            StaticCredentialProvider::new().with_key("openai", "sk-test"),
            dir.path(),
        );

        let response = app
            .oneshot(post_json("/chat", json!({"messages": [], "llm_choice": "openai"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = read_json(response).await["detail"].as_str().unwrap().to_string();
        assert!(detail.contains("openai"));
    }

    #[tokio::test]
    async fn test_chat_missing_key_is_400_without_upstream_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = config_with_upstream(&server);
        let app = app(&config, StaticCredentialProvider::new(), dir.path());

        let response = app
            .oneshot(post_json("/chat", json!({"messages": [], "llm_choice": "openai"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await["detail"],
            "API key for openai not found"
        );
    }

    #[tokio::test]
    async fn test_chat_rejects_non_array_messages() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&AppConfig::default(), StaticCredentialProvider::new(), dir.path());

        let response = app
            .oneshot(post_json("/chat", json!({"messages": "hi", "llm_choice": "mock"})))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        assert_eq!(read_json(response).await["type"], "invalid_request_error");
    }

    #[tokio::test]
    async fn test_feedback_writes_screenshot_and_state() {
        let dir = tempfile::tempdir().unwrap();
        let feedback_dir = dir.path().join("feedback");
        let app = app(&AppConfig::default(), StaticCredentialProvider::new(), &feedback_dir);

        let image = [0x89u8, b'P', b'N', b'G', 1, 2, 3];
        let state = r#"{"theme":"dark"}"#;

        let response = app
            .oneshot(post_json(
                "/feedback",
                json!({
                    "screenshot": format!("data:image/png;base64,{}", STANDARD.encode(image)),
                    "localState": state,
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({"message": "Feedback received successfully"})
        );

        let mut names: Vec<String> = std::fs::read_dir(&feedback_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names.len(), 2);

        let png = names.iter().find(|n| n.starts_with("screenshot_")).unwrap();
        let json = names.iter().find(|n| n.starts_with("state_")).unwrap();
        let id = png.trim_start_matches("screenshot_").trim_end_matches(".png");
        assert_eq!(json, &format!("state_{}.json", id));

        assert_eq!(std::fs::read(feedback_dir.join(png)).unwrap(), image);
        assert_eq!(std::fs::read_to_string(feedback_dir.join(json)).unwrap(), state);
    }

    #[tokio::test]
    async fn test_feedback_without_comma_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&AppConfig::default(), StaticCredentialProvider::new(), dir.path());

        let response = app
            .oneshot(post_json(
                "/feedback",
                json!({"screenshot": "not-a-data-url", "localState": "{}"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&AppConfig::default(), StaticCredentialProvider::new(), dir.path());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&AppConfig::default(), StaticCredentialProvider::new(), dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/chat")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&AppConfig::default(), StaticCredentialProvider::new(), dir.path());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(REQUEST_ID_HEADER, "req-7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "req-7");

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let generated = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_unknown_paths_share_one_metrics_series() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();

        let config = AppConfig::default();

        metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                for i in 0..5 {
                    let app = app(&config, StaticCredentialProvider::new(), dir.path());
                    let response = app
                        .oneshot(
                            Request::builder()
                                .uri(format!("/scan/{}-abcdef", i))
                                .body(Body::empty())
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    assert_eq!(response.status(), StatusCode::NOT_FOUND);
                }
            })
        });

        let rendered = handle.render();
        let series: Vec<&str> = rendered
            .lines()
            .filter(|line| line.starts_with("http_requests_total{"))
            .collect();

        assert_eq!(series.len(), 1, "{}", rendered);
        assert!(series[0].contains(r#"path="unmatched""#));
        assert!(series[0].ends_with(" 5"));
        assert!(!rendered.contains("/scan/"));
    }
}
