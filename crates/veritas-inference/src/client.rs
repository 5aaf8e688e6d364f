use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::verdict;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://router.huggingface.co/v1/chat/completions";
pub const CLASSIFIER_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct InferenceClient {
    http: Client,
    endpoint: String,
    token: String,
    model: String,
}

impl InferenceClient {
    pub fn new(token: String, endpoint: Option<String>) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_CHAT_ENDPOINT.into()),
            token,
            model: CLASSIFIER_MODEL.into(),
        })
    }

    /// Send one chat exchange and return the first choice's text, trimmed.
    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .context("inference request failed")?
            .error_for_status()
            .context("inference provider returned an error status")?
            .json::<ChatCompletionResponse>()
            .await
            .context("could not parse inference response")?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("inference response contained no choices")?;

        Ok(content.trim().to_string())
    }

    /// Run the classification exchange: system instructions plus the raw
    /// user message, with the label-presence guarantee enforced on the
    /// reply.
    pub async fn classify(&self, system_prompt: String, user_message: String) -> Result<String> {
        let reply = self
            .complete(vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_message),
            ])
            .await?;

        Ok(verdict::normalize(&reply))
    }
}
