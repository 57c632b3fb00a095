use super::LanguageModelConnector;
use crate::connectors::errors::ProviderError;
use crate::models::ChatMessage;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Behaviour {
    Reply(String),
    Fail,
    Unavailable,
}

/// Mock language model for testing - canned reply, failure, or not configured.
///
/// Every `generate` call records its prompt so tests can count and inspect calls.
pub struct MockLanguageModel {
    behaviour: Behaviour,
    prompts: Mutex<Vec<String>>,
}

impl MockLanguageModel {
    pub fn replying(response: &str) -> Self {
        Self::with(Behaviour::Reply(response.to_string()))
    }

    pub fn failing() -> Self {
        Self::with(Behaviour::Fail)
    }

    pub fn unavailable() -> Self {
        Self::with(Behaviour::Unavailable)
    }

    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts().len()
    }
}

#[async_trait]
impl LanguageModelConnector for MockLanguageModel {
    fn name(&self) -> &str {
        "mock"
    }

    fn is_available(&self) -> bool {
        !matches!(self.behaviour, Behaviour::Unavailable)
    }

    async fn generate(
        &self,
        prompt: &str,
        _history: &[ChatMessage],
        _system_prompt: Option<&str>,
    ) -> Result<String, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.behaviour {
            Behaviour::Reply(response) => Ok(response.clone()),
            Behaviour::Fail => Err(ProviderError::Status {
                provider: self.name().to_string(),
                status: 500,
            }),
            Behaviour::Unavailable => Err(ProviderError::NotConfigured {
                provider: self.name().to_string(),
            }),
        }
    }
}
