//! Tool catalog connector
//!
//! Read-only access to published tools and active categories. The assistant only ever
//! talks to the catalog through [`ToolCatalogConnector`], so retrieval can be exercised
//! against an in-memory snapshot in tests.

use crate::connectors::errors::ConnectorError;
use crate::models::{Category, CategoryOrder, Tool, ToolQuery};
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryToolCatalog;
pub use postgres::PgToolCatalog;

#[async_trait]
pub trait ToolCatalogConnector: Send + Sync {
    /// Tools matching `query`, ordered and truncated as it requests
    async fn query(&self, query: &ToolQuery) -> Result<Vec<Tool>, ConnectorError>;

    /// Active categories in the requested order
    async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<Category>, ConnectorError>;

    /// Cheap reachability check used by the health report
    async fn ping(&self) -> Result<(), ConnectorError> {
        self.list_categories(CategoryOrder::default()).await.map(|_| ())
    }
}
