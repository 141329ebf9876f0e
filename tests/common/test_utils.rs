use axum_test::TestServer;
use excuse_gen::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    llm::InferenceClient,
    server::{AppState, router},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "dapi-test-token";
pub const INVOCATIONS_PATH: &str = "/serving-endpoints/test-model/invocations";

pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body><form id=\"excuse-form\"></form></body></html>";

/// Create a test configuration pointing at `endpoint_url`
pub fn create_test_config(endpoint_url: &str, api_token: Option<&str>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            public_dir: None,
        },
        llm: LlmConfig {
            endpoint_url: endpoint_url.to_string(),
            api_token: api_token.map(str::to_string),
            timeout_secs: 1,
        },
    }
}

/// Create a temporary public directory containing `index.html` and a stylesheet
pub fn create_public_dir() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(temp_dir.path().join("app.css"), "body { color: red; }").unwrap();
    temp_dir
}

pub fn create_test_state(
    config: Config,
    inference: Arc<dyn InferenceClient>,
    public_dir: Option<&TempDir>,
) -> AppState {
    AppState {
        config: Arc::new(config),
        inference,
        public_dir: public_dir.map(|d| d.path().to_path_buf()),
    }
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).expect("Failed to start test server")
}

/// A complete, valid generation request body
pub fn sample_request() -> Value {
    json!({
        "category": "Missed Meeting",
        "tone": "Apologetic",
        "seriousness": 4,
        "recipient_name": "Dana",
        "sender_name": "Sam",
        "eta_when": "tomorrow at 10am"
    })
}

/// Wrap model output in the `predictions` envelope returned by the serving endpoint
pub fn predictions_body(content: &str) -> Value {
    json!({
        "predictions": [
            { "candidates": [ { "message": { "role": "assistant", "content": content } } ] }
        ]
    })
}
