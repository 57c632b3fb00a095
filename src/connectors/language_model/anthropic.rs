use super::{history_json, LanguageModelConnector};
use crate::connectors::config::LanguageModelConfig;
use crate::connectors::errors::ProviderError;
use crate::models::{ChatMessage, ChatRole};
use async_trait::async_trait;
use std::time::Duration;

/// Default Anthropic endpoint.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-latest";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Calls the Anthropic Messages API.
pub struct AnthropicProvider {
    client: reqwest::Client,
    name: String,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub fn from_config(config: &LanguageModelConfig) -> Result<Self, ProviderError> {
        let name = config.display_name();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Request {
                provider: name.clone(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            name,
            endpoint: config
                .endpoint
                .clone()
                .unwrap_or_else(|| ANTHROPIC_API_URL.to_string()),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string()),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

/// The Messages API requires the conversation to open with a user turn, so leading
/// assistant turns (a UI greeting, typically) are dropped.
fn conversation_start(history: &[ChatMessage]) -> &[ChatMessage] {
    let first_user = history
        .iter()
        .position(|message| {
            message.role == ChatRole::User && !message.content.trim().is_empty()
        })
        .unwrap_or(history.len());
    &history[first_user..]
}

#[async_trait]
impl LanguageModelConnector for AnthropicProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    #[tracing::instrument(name = "Anthropic completion", skip_all, fields(provider = %self.name))]
    async fn generate(
        &self,
        prompt: &str,
        history: &[ChatMessage],
        system_prompt: Option<&str>,
    ) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| ProviderError::NotConfigured {
            provider: self.name.clone(),
        })?;

        let mut messages = history_json(conversation_start(history));
        messages.push(serde_json::json!({ "role": "user", "content": prompt }));

        let mut body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "messages": messages,
        });
        if let Some(system) = system_prompt {
            body["system"] = serde_json::json!(system);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Request {
                provider: self.name.clone(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %text, "Language model returned an error status");
            return Err(ProviderError::Status {
                provider: self.name.clone(),
                status: status.as_u16(),
            });
        }

        let json: serde_json::Value =
            response.json().await.map_err(|e| ProviderError::InvalidResponse {
                provider: self.name.clone(),
                message: e.to_string(),
            })?;

        json["content"][0]["text"]
            .as_str()
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(|content| content.to_string())
            .ok_or_else(|| ProviderError::EmptyResponse {
                provider: self.name.clone(),
            })
    }
}
