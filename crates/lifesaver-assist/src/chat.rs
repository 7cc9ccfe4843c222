//! Relay client for the external chat-completions provider.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompts::{MODEL, SESSION_ID, SYSTEM_PROMPT};

/// Default OpenAI-compatible endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Relay errors.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Client holding the provider credential and an HTTP connection pool.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    /// Constant session identifier; the provider sees one shared
    /// conversation context for the whole instance.
    user: &'a str,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl ChatClient {
    /// Build a client against the default provider endpoint. The key is
    /// optional here; its absence only fails a relay call.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Build a client against a custom endpoint (used by tests).
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Forward one user message and return the assistant's reply.
    ///
    /// Each call is a fresh single-turn exchange with the fixed system
    /// prompt; nothing is persisted locally between calls, and no retry
    /// is attempted on failure.
    pub async fn relay(&self, message: &str) -> ChatResult<String> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingApiKey)?;

        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: message,
                },
            ],
            user: SESSION_ID,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion = response.json().await?;
        extract_reply(completion)
    }
}

/// Pull the assistant text out of a completion.
fn extract_reply(completion: ChatCompletion) -> ChatResult<String> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ChatError::MalformedResponse("no assistant message in completion".into()))
}
