//! External Service Connectors
//!
//! Adapters for everything the assistant does not own: the tool catalog store and the
//! language model provider. The assistant depends on the traits only; implementations
//! are picked from configuration at startup and injected as `Arc<dyn ...>`.
//!
//! ## Testing
//!
//! ```ignore
//! let catalog = Arc::new(InMemoryToolCatalog::new(tools, categories));
//! let llm = Arc::new(MockLanguageModel::failing());
//! let orchestrator = RecommendationOrchestrator::new(catalog, llm, AssistantSettings::default());
//! ```

pub mod catalog;
pub mod config;
pub mod errors;
pub mod language_model;

pub use catalog::{InMemoryToolCatalog, PgToolCatalog, ToolCatalogConnector};
pub use config::{ConnectorConfig, LanguageModelConfig, LanguageModelKind};
pub use errors::{ConnectorError, ProviderError};
pub use language_model::{
    AnthropicProvider, DisabledLanguageModel, LanguageModelConnector, MockLanguageModel,
    OpenAiProvider,
};

pub use language_model::init as init_language_model;
