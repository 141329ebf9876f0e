use super::types::{InvocationRequest, completion_text};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends `prompt` to the model and returns the generated text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Client for a Databricks model-serving `invocations` endpoint.
pub struct DatabricksClient {
    http: reqwest::Client,
    endpoint_url: String,
    api_token: Option<String>,
}

impl DatabricksClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint_url: config.endpoint_url.clone(),
            api_token: config.api_token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

fn map_request_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        error!("Timeout calling inference endpoint");
        Error::UpstreamTimeout
    } else if e.is_decode() {
        error!("Inference endpoint returned a body that is not JSON: {}", e);
        Error::upstream("Inference endpoint returned a non-JSON body")
    } else {
        error!("Failed to reach inference endpoint: {}", e);
        Error::Network(e)
    }
}

#[async_trait]
impl InferenceClient for DatabricksClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let token = self
            .api_token
            .as_deref()
            .ok_or_else(|| Error::config("DATABRICKS_API_TOKEN not configured"))?;

        debug!(
            "Calling inference endpoint {} with prompt of {} chars",
            self.endpoint_url,
            prompt.len()
        );

        let response = self
            .http
            .post(&self.endpoint_url)
            .bearer_auth(token)
            .json(&InvocationRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Inference endpoint returned {}: {}", status, body);
            return Err(Error::upstream(format!(
                "Inference endpoint returned status {}",
                status
            )));
        }

        let result: Value = response.json().await.map_err(map_request_error)?;
        debug!("Inference endpoint response: {}", result);

        completion_text(&result)
            .ok_or_else(|| Error::upstream("Invalid response format from inference endpoint"))
    }
}
