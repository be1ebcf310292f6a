use super::mocks::MockCompletionClient;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use medrelay::{
    config::{CorsConfig, LlmConfig},
    llm::{OpenRouterClient, Relay},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// LLM settings pointing at the given base URL
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        timeout_secs: 5,
        ..LlmConfig::default()
    }
}

/// Router backed by a mock completion client
pub fn create_test_app(client: MockCompletionClient) -> Router {
    let relay = Relay::new(Arc::new(client), &create_test_llm_config("http://unused"));
    build_app(relay)
}

/// Router backed by the real HTTP client talking to `base_url`
pub fn create_http_app(base_url: &str) -> Router {
    let config = create_test_llm_config(base_url);
    let client = OpenRouterClient::new(&config).unwrap();
    build_app(Relay::new(Arc::new(client), &config))
}

fn build_app(relay: Relay) -> Router {
    let cors = server::cors_layer(&CorsConfig::default()).unwrap();
    server::router(AppState::new(relay), cors)
}

/// POST a JSON body and return the status with the parsed response body
pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}
