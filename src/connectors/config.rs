use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConnectorConfig {
    pub language_model: Option<LanguageModelConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageModelKind {
    /// OpenAI chat completions or any compatible endpoint (Mistral, Groq, Together...)
    Openai,
    Anthropic,
}

/// Language model connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageModelConfig {
    /// Enable/disable LLM calls altogether
    pub enabled: bool,
    pub provider: LanguageModelKind,
    /// Name reported in `sources.external`; defaults to the provider kind
    #[serde(default)]
    pub provider_name: Option<String>,
    /// Override of the provider's default endpoint
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    #[serde(default = "LanguageModelConfig::default_temperature")]
    pub temperature: f32,
    #[serde(default = "LanguageModelConfig::default_max_tokens")]
    pub max_tokens: u32,
    /// API key (from env: LLM_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl LanguageModelConfig {
    const fn default_temperature() -> f32 {
        0.7
    }

    const fn default_max_tokens() -> u32 {
        1000
    }

    pub fn display_name(&self) -> String {
        self.provider_name.clone().unwrap_or_else(|| match self.provider {
            LanguageModelKind::Openai => "openai".to_string(),
            LanguageModelKind::Anthropic => "anthropic".to_string(),
        })
    }
}

impl Default for LanguageModelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: LanguageModelKind::Openai,
            provider_name: None,
            endpoint: None,
            model: None,
            timeout_secs: 30,
            temperature: Self::default_temperature(),
            max_tokens: Self::default_max_tokens(),
            api_key: None,
        }
    }
}
