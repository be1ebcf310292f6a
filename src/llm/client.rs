use super::types::{CompletionRequest, CompletionResponse};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse>;
}

/// Chat completions over HTTP against OpenRouter or any OpenAI-compatible base URL.
pub struct OpenRouterClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl OpenRouterClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn create_chat_completion(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse> {
        debug!(
            "Sending chat completion to {} with model {}",
            self.endpoint, request.model
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::upstream(format!("Completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(Error::upstream(format!(
                "Completion API returned {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::upstream(format!("Failed to read completion response: {}", e)))?;

        let completion: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            Error::upstream(format!("Unexpected completion response shape: {}", e))
        })?;

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        Ok(completion)
    }
}
