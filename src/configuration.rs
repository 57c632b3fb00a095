use crate::connectors::ConnectorConfig;
use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub connectors: ConnectorConfig,
    #[serde(default)]
    pub assistant: AssistantSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "DatabaseSettings::default_enabled")]
    pub enabled: bool,
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    #[serde(default = "DatabaseSettings::default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseSettings {
    fn default_enabled() -> bool {
        true
    }

    fn default_max_connections() -> u32 {
        5
    }

    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

/// Tuning of the recommendation pipeline.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    /// Upper bound on tools fetched per question
    pub candidate_limit: usize,
    pub max_alternatives: usize,
    /// Tools given to the language model as context when nothing matched
    pub context_tools: usize,
    /// Conversation turns forwarded to the language model
    pub history_turns: usize,
    pub enrich_reasoning: bool,
    pub enrichment_timeout_secs: u64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            candidate_limit: 20,
            max_alternatives: 3,
            context_tools: 10,
            history_turns: 10,
            enrich_reasoning: true,
            enrichment_timeout_secs: 8,
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // `configuration.yaml` first, then APP__SECTION__KEY environment overrides
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
