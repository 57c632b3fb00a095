use super::{history_json, LanguageModelConnector};
use crate::connectors::config::LanguageModelConfig;
use crate::connectors::errors::ProviderError;
use crate::models::ChatMessage;
use async_trait::async_trait;
use std::time::Duration;

/// Default OpenAI-compatible endpoint.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Calls the OpenAI Chat Completions API (or any compatible endpoint).
pub struct OpenAiProvider {
    client: reqwest::Client,
    name: String,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
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
                .unwrap_or_else(|| OPENAI_API_URL.to_string()),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn request_body(
        &self,
        prompt: &str,
        history: &[ChatMessage],
        system_prompt: Option<&str>,
    ) -> serde_json::Value {
        let mut messages = Vec::with_capacity(history.len() + 2);
        if let Some(system) = system_prompt {
            messages.push(serde_json::json!({ "role": "system", "content": system }));
        }
        messages.extend(history_json(history));
        messages.push(serde_json::json!({ "role": "user", "content": prompt }));

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }
}

#[async_trait]
impl LanguageModelConnector for OpenAiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    #[tracing::instrument(name = "OpenAI completion", skip_all, fields(provider = %self.name))]
    async fn generate(
        &self,
        prompt: &str,
        history: &[ChatMessage],
        system_prompt: Option<&str>,
    ) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| ProviderError::NotConfigured {
            provider: self.name.clone(),
        })?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&self.request_body(prompt, history, system_prompt))
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

        json["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(|content| content.to_string())
            .ok_or_else(|| ProviderError::EmptyResponse {
                provider: self.name.clone(),
            })
    }
}
