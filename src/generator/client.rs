//! Chat-completion client that turns a prompt into a question.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, QuizError};
use crate::models::Question;

use super::extract::parse_question;
use super::prompt::SYSTEM_PROMPT;

const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Source of generated questions.
///
/// Implementations swallow every failure: `None` means "use a fallback".
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn request(&self, prompt: &str) -> Option<Question>;
}

/// OpenRouter-compatible chat-completion client.
pub struct ChatCompletionClient {
    config: GeneratorConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(config: GeneratorConfig) -> Result<Self, QuizError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Request a question, retrying transient failures.
    pub async fn try_request(&self, prompt: &str) -> Result<Question, GeneratorError> {
        let mut attempt = 0;
        loop {
            match self.send(prompt).await {
                Err(e) if e.is_transient() && attempt < self.config.retries => {
                    attempt += 1;
                    warn!(error = %e, attempt, "transient generator failure, retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                result => return result,
            }
        }
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.model))]
    async fn send(&self, prompt: &str) -> Result<Question, GeneratorError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let mut req = self
            .client
            .post(self.config.endpoint())
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title);

        if let Some(key) = &self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let response = req.json(&body).send().await.map_err(|e| {
            if e.is_timeout() {
                GeneratorError::Timeout(self.config.timeout_secs)
            } else {
                GeneratorError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Api { status, message });
        }

        let text = response
            .text()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;
        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| GeneratorError::Api {
                status,
                message: format!("failed to parse response: {e}"),
            })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GeneratorError::EmptyContent)?;

        debug!(len = content.len(), "received generator content");
        parse_question(&content)
    }
}

#[async_trait]
impl QuestionGenerator for ChatCompletionClient {
    async fn request(&self, prompt: &str) -> Option<Question> {
        match self.try_request(prompt).await {
            Ok(question) => Some(question),
            Err(e) => {
                warn!(error = %e, "generator produced no usable question");
                None
            }
        }
    }
}
