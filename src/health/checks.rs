use super::models::{ComponentHealth, HealthReport};
use crate::connectors::{LanguageModelConnector, ToolCatalogConnector};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_RESPONSE_THRESHOLD_MS: u64 = 1000;

pub struct HealthChecker {
    catalog: Arc<dyn ToolCatalogConnector>,
    llm: Arc<dyn LanguageModelConnector>,
    start_time: Instant,
}

impl HealthChecker {
    pub fn new(
        catalog: Arc<dyn ToolCatalogConnector>,
        llm: Arc<dyn LanguageModelConnector>,
    ) -> Self {
        Self {
            catalog,
            llm,
            start_time: Instant::now(),
        }
    }

    pub async fn check_all(&self) -> HealthReport {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let mut report = HealthReport::new(version, self.start_time.elapsed().as_secs());

        let catalog = timeout(CHECK_TIMEOUT, self.check_catalog())
            .await
            .unwrap_or_else(|_| ComponentHealth::unhealthy("Timeout"));
        report.add_component("catalog", catalog);
        report.add_component("language_model", self.check_language_model());

        report
    }

    #[tracing::instrument(name = "Check catalog health", skip(self))]
    async fn check_catalog(&self) -> ComponentHealth {
        let start = Instant::now();
        match self.catalog.ping().await {
            Ok(()) => {
                let elapsed = start.elapsed().as_millis() as u64;
                if elapsed > SLOW_RESPONSE_THRESHOLD_MS {
                    ComponentHealth::degraded("Catalog responding slowly").timed(elapsed)
                } else {
                    ComponentHealth::healthy().timed(elapsed)
                }
            }
            Err(err) => {
                tracing::error!("Catalog health check failed: {}", err);
                ComponentHealth::unhealthy(err.to_string())
            }
        }
    }

    /// Configuration state only; the provider is never called.
    fn check_language_model(&self) -> ComponentHealth {
        let health = if self.llm.is_available() {
            ComponentHealth::healthy()
        } else {
            ComponentHealth::degraded("Language model not configured, catalog-only answers")
        };
        health.detail("provider", serde_json::json!(self.llm.name()))
    }
}
