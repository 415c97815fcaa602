//! HTTP client for an OpenAI-compatible chat completions API.
//!
//! One request per call, no retry: the interview engine treats every error
//! from here as transient and falls back locally, so the client's only job
//! is to report failures accurately.

use super::prompts;
use super::{AskIntent, ReviewModel};
use crate::constants::{
    INTERVIEW_MAX_TOKENS, INTERVIEW_TEMPERATURE, REGENERATE_MAX_TOKENS, REGENERATE_TEMPERATURE,
    SYNTHESIS_MAX_TOKENS, SYNTHESIS_TEMPERATURE,
};
use crate::errors::AiError;
use crate::interview::{Subject, Turn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Client for an OpenAI-compatible chat completions endpoint (Groq by
/// default).
pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GroqClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API base URL (e.g., "https://api.groq.com/openai/v1")
    /// * `api_key` - Bearer token; an empty key is sent as-is and will be
    ///   rejected by the service, which the engine absorbs like any outage
    /// * `model` - Chat model identifier
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    /// Sends a chat completion request and returns the reply text.
    fn chat(
        &self,
        messages: &[Message],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, AiError> {
        debug!("Sending chat request with model: {}", self.model);

        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(AiError::ServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(AiError::Http { status, body });
        }

        let chat_response: ChatResponse = response.json().map_err(|e| {
            AiError::InvalidResponse(format!("Failed to parse chat response: {}", e))
        })?;

        let reply = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AiError::InvalidResponse("Response contained no choices".to_string()))?;

        debug!("Received chat response ({} bytes)", reply.len());
        Ok(reply.trim().to_string())
    }
}

impl ReviewModel for GroqClient {
    fn ask(
        &self,
        subject: &Subject,
        exchange: &[Turn],
        intent: AskIntent,
    ) -> Result<String, AiError> {
        let messages = prompts::interview_messages(subject, exchange, intent);
        let (temperature, max_tokens) = match intent {
            AskIntent::Opening | AskIntent::Continue => {
                (INTERVIEW_TEMPERATURE, INTERVIEW_MAX_TOKENS)
            }
            AskIntent::Regenerate => (REGENERATE_TEMPERATURE, REGENERATE_MAX_TOKENS),
        };
        self.chat(&messages, temperature, max_tokens)
    }

    fn synthesize(&self, subject: &Subject, exchange: &[Turn]) -> Result<String, AiError> {
        let messages = prompts::synthesis_messages(subject, exchange);
        self.chat(&messages, SYNTHESIS_TEMPERATURE, SYNTHESIS_MAX_TOKENS)
    }
}
