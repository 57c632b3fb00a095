//! Language model connector
//!
//! `LanguageModelConnector` abstracts over LLM backends.
//! Production: `OpenAiProvider`, `AnthropicProvider`.
//! Tests: `MockLanguageModel` returns canned responses or failures.

use crate::connectors::config::{ConnectorConfig, LanguageModelConfig, LanguageModelKind};
use crate::connectors::errors::ProviderError;
use crate::models::ChatMessage;
use async_trait::async_trait;
use std::sync::Arc;

pub mod anthropic;
pub mod mock;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use mock::MockLanguageModel;
pub use openai::OpenAiProvider;

#[async_trait]
pub trait LanguageModelConnector: Send + Sync {
    /// Provider name reported in answer sources and logs.
    fn name(&self) -> &str;

    /// True when credentials are configured. Never touches the network.
    fn is_available(&self) -> bool;

    /// Generate a completion for `prompt`, after the prior conversation turns.
    async fn generate(
        &self,
        prompt: &str,
        history: &[ChatMessage],
        system_prompt: Option<&str>,
    ) -> Result<String, ProviderError>;
}

/// Stand-in used when the language model is switched off in configuration.
pub struct DisabledLanguageModel;

#[async_trait]
impl LanguageModelConnector for DisabledLanguageModel {
    fn name(&self) -> &str {
        "disabled"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn generate(
        &self,
        _prompt: &str,
        _history: &[ChatMessage],
        _system_prompt: Option<&str>,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::NotConfigured {
            provider: self.name().to_string(),
        })
    }
}

/// Build the provider selected in `config`.
pub fn create_provider(
    config: &LanguageModelConfig,
) -> Result<Arc<dyn LanguageModelConnector>, ProviderError> {
    Ok(match config.provider {
        LanguageModelKind::Openai => Arc::new(OpenAiProvider::from_config(config)?),
        LanguageModelKind::Anthropic => Arc::new(AnthropicProvider::from_config(config)?),
    })
}

/// Initialize the language model connector from settings.
///
/// Falls back to [`DisabledLanguageModel`] when the connector is disabled or the HTTP
/// client cannot be built; the assistant then answers from the catalog only.
pub fn init(connector_config: &ConnectorConfig) -> Arc<dyn LanguageModelConnector> {
    let Some(config) = connector_config.language_model.as_ref().filter(|c| c.enabled) else {
        tracing::warn!("Language model connector disabled - catalog-only answers");
        return Arc::new(DisabledLanguageModel);
    };

    let mut config = config.clone();
    if config.api_key.is_none() {
        config.api_key = std::env::var("LLM_API_KEY").ok().filter(|key| !key.is_empty());
    }

    match create_provider(&config) {
        Ok(provider) => {
            tracing::info!(
                provider = %provider.name(),
                available = provider.is_available(),
                "Initialized language model connector"
            );
            provider
        }
        Err(err) => {
            tracing::error!("Failed to initialize language model connector: {}", err);
            Arc::new(DisabledLanguageModel)
        }
    }
}

/// Chat messages in the `{role, content}` shape both HTTP APIs accept.
pub(crate) fn history_json(history: &[ChatMessage]) -> Vec<serde_json::Value> {
    history
        .iter()
        .filter(|message| !message.content.trim().is_empty())
        .map(|message| {
            serde_json::json!({
                "role": message.role.as_str(),
                "content": message.content,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_yields_unavailable_connector() {
        let config = ConnectorConfig {
            language_model: Some(LanguageModelConfig::default()),
        };
        let connector = init(&config);
        assert!(!connector.is_available());
        assert_eq!(connector.name(), "disabled");
    }

    #[test]
    fn create_provider_respects_kind() {
        let mut config = LanguageModelConfig {
            enabled: true,
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        assert_eq!(create_provider(&config).unwrap().name(), "openai");

        config.provider = LanguageModelKind::Anthropic;
        assert_eq!(create_provider(&config).unwrap().name(), "anthropic");

        config.provider_name = Some("mistral".to_string());
        config.provider = LanguageModelKind::Openai;
        assert_eq!(create_provider(&config).unwrap().name(), "mistral");
    }

    #[test]
    fn history_skips_blank_turns() {
        let history = vec![
            ChatMessage::user("Je cherche un CRM"),
            ChatMessage::assistant("   "),
            ChatMessage::assistant("HubSpot est un bon choix."),
        ];
        let json = history_json(&history);
        assert_eq!(json.len(), 2);
        assert_eq!(json[1]["role"], "assistant");
    }
}
