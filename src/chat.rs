use crate::config::Config;
use crate::error::DivvyError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for expense tracking.";

/// Fixed prefix prepended to every forwarded message.
pub fn build_prompt(message: &str) -> String {
    format!("You are a friendly expense assistant. {}", message)
}

#[derive(Serialize, Debug)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize, Debug)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize, Debug)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: String,
}

/// Stateless passthrough to the chat-completions API. Every failure
/// mode surfaces as `DivvyError::ChatUpstream`; nothing is folded
/// into a success payload.
pub struct ChatClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    pub fn new(api_base: String, api_key: String, model: String) -> Self {
        ChatClient {
            http: reqwest::Client::new(),
            api_base,
            api_key,
            model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.openai_api_base.clone(),
            config.openai_api_key.clone(),
            config.chat_model.clone(),
        )
    }

    pub async fn complete(&self, message: &str) -> Result<String, DivvyError> {
        if self.api_key.is_empty() {
            return Err(DivvyError::ChatUpstream(
                "OPENAI_API_KEY is not configured".to_string(),
            ));
        }

        let url = format!("{}/chat/completions", self.api_base);
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(message),
                },
            ],
        };
        debug!("Forwarding chat message to {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DivvyError::ChatUpstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!("Completion API returned {}: {}", status, detail);
            return Err(DivvyError::ChatUpstream(format!(
                "completion API returned {}: {}",
                status, detail
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| DivvyError::ChatUpstream(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| DivvyError::ChatUpstream("completion API returned no choices".to_string()))
    }
}
