use super::{
    client::CompletionClient,
    types::{ChatMessage, CompletionRequest},
};
use crate::{Error, Result, config::LlmConfig};
use std::sync::Arc;
use tracing::debug;

/// Turns a prompt into a single chat completion call and returns the answer text.
pub struct Relay {
    client: Arc<dyn CompletionClient>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl Relay {
    pub fn new(client: Arc<dyn CompletionClient>, config: &LlmConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as the only user message and returns the first choice's
    /// content with surrounding whitespace removed.
    ///
    /// Every failure, from transport to a response without usable content, is
    /// reported as [`Error::Upstream`].
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!("Relaying prompt of {} bytes to {}", prompt.len(), self.model);

        let response = match self.client.create_chat_completion(request).await {
            Ok(response) => response,
            Err(e) if e.is_upstream() => return Err(e),
            Err(e) => return Err(Error::upstream(e.to_string())),
        };

        let content = response
            .first_content()
            .ok_or_else(|| Error::upstream("Completion response contained no message content"))?;

        Ok(content.trim().to_string())
    }
}
