use async_trait::async_trait;
use medrelay::{
    Error, Result,
    llm::{Choice, ChoiceMessage, CompletionClient, CompletionRequest, CompletionResponse},
};
use std::sync::{Arc, Mutex};

/// Mock completion client that records every request it receives
#[derive(Debug, Clone)]
pub struct MockCompletionClient {
    pub responses: Arc<Mutex<Vec<CompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub error: Option<String>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<CompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn create_chat_completion(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::upstream("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Completion response with one choice per given content
pub fn create_mock_completion(contents: &[&str]) -> CompletionResponse {
    CompletionResponse {
        choices: contents
            .iter()
            .map(|content| Choice {
                message: ChoiceMessage {
                    content: Some(content.to_string()),
                },
            })
            .collect(),
    }
}
