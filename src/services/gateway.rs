use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Sampling temperature sent with every chat-completion request.
pub const GATEWAY_TEMPERATURE: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

/// Assistant reply as returned by the gateway. Text completions carry
/// `content`; image generations carry entries in `images`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub images: Vec<MessageImage>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MessageImage {
    pub image_url: ImageUrl,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

/// One chat-completion round trip. Implementors encapsulate transport and
/// credential handling; callers stay testable against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> AppResult<AssistantMessage>;
}

/// Production gateway: a single POST per call, no retry, no streaming.
pub struct HttpChatGateway {
    http_client: reqwest::Client,
    gateway_url: String,
    api_key: Option<SecretString>,
}

impl HttpChatGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            gateway_url: config.gateway_url.clone(),
            api_key: config.gateway_api_key.clone(),
        }
    }

    fn bearer_token(&self) -> AppResult<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .ok_or_else(|| AppError::ConfigurationError("AI_GATEWAY_API_KEY is not set".into()))
    }
}

/// Maps a non-2xx upstream status onto the error taxonomy. 429 and 402 keep
/// their identity; everything else collapses into one upstream failure.
fn error_for_status(status: u16, body: String) -> AppError {
    match status {
        429 => AppError::RateLimited,
        402 => AppError::QuotaExhausted,
        status => AppError::UpstreamFailure { status, body },
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn complete(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> AppResult<AssistantMessage> {
        let token = self.bearer_token()?.to_owned();
        let request = ChatCompletionRequest {
            model,
            messages: &messages,
            temperature: GATEWAY_TEMPERATURE,
        };

        let response = self
            .http_client
            .post(&self.gateway_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), body));
        }

        let mut completion: ChatCompletionResponse = response.json().await?;
        if completion.choices.is_empty() {
            return Err(AppError::EmptyResponse);
        }
        Ok(completion.choices.remove(0).message)
    }
}
