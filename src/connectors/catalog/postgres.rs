use super::ToolCatalogConnector;
use crate::connectors::errors::ConnectorError;
use crate::db;
use crate::models::{Category, CategoryOrder, Tool, ToolQuery};
use async_trait::async_trait;
use sqlx::PgPool;

/// Catalog backed by the `tool` and `category` tables
pub struct PgToolCatalog {
    pool: PgPool,
}

impl PgToolCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToolCatalogConnector for PgToolCatalog {
    async fn query(&self, query: &ToolQuery) -> Result<Vec<Tool>, ConnectorError> {
        db::tool::fetch_by_query(&self.pool, query)
            .await
            .map_err(ConnectorError::from)
    }

    async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<Category>, ConnectorError> {
        db::category::fetch_active(&self.pool, order)
            .await
            .map_err(ConnectorError::from)
    }

    async fn ping(&self) -> Result<(), ConnectorError> {
        db::category::ping(&self.pool)
            .await
            .map_err(ConnectorError::from)
    }
}
