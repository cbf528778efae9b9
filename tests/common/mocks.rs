use async_trait::async_trait;
use travel_buddy::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client that answers with scripted replies in call order
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub replies: Arc<Mutex<Vec<std::result::Result<String, String>>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, content: &str) -> Self {
        self.replies.lock().unwrap().push(Ok(content.to_string()));
        self
    }

    pub fn fail(self, error: &str) -> Self {
        self.replies.lock().unwrap().push(Err(error.to_string()));
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn completion(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "chatcmpl-test".to_string(),
        model: "gpt-4o-mini".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            },
            finish_reason: Some("Stop".to_string()),
        }],
        usage: None,
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        match replies.remove(0) {
            Ok(content) => Ok(completion(&content)),
            Err(error) => Err(Error::llm(error)),
        }
    }
}
