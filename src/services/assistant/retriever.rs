use crate::connectors::{ConnectorError, ToolCatalogConnector};
use crate::models::{Priority, SearchFilters, Tool, ToolQuery, ToolSort, ToolSortField, UserIntent};

/// Sort key implied by what the asker prioritises.
pub fn sort_for(priority: Priority) -> ToolSort {
    let field = match priority {
        Priority::Price => ToolSortField::ValueForMoneyScore,
        Priority::EaseOfUse => ToolSortField::EaseOfUseScore,
        Priority::Performance => ToolSortField::PerformanceScore,
        Priority::Features | Priority::Integration => ToolSortField::OverallRating,
    };
    ToolSort::desc(field)
}

/// Candidate query for an intent plus explicit caller filters.
///
/// Explicit filters win over what was read from the text (pricing model).
pub fn build_query(intent: &UserIntent, filters: &SearchFilters, limit: usize) -> ToolQuery {
    let mut query = ToolQuery::published(limit)
        .sorted_by(sort_for(intent.priority))
        .then_by(ToolSort::desc(ToolSortField::OverallRating));

    query.category_slugs = intent.categories.clone();
    query.keywords = intent.keywords.clone();
    query.pricing_model = filters.pricing_model.or(intent.pricing_preference);
    query.category_id = filters.category_id;
    query.subcategory_id = filters.subcategory_id;
    query.api_available = filters.api_available;
    query.open_source = filters.open_source;
    query.min_rating = filters.min_rating;
    query
}

#[tracing::instrument(name = "Retrieve candidate tools", skip_all, fields(priority = ?intent.priority))]
pub async fn retrieve(
    catalog: &dyn ToolCatalogConnector,
    intent: &UserIntent,
    filters: &SearchFilters,
    limit: usize,
) -> Result<Vec<Tool>, ConnectorError> {
    let query = build_query(intent, filters, limit);
    let candidates = catalog.query(&query).await?;
    tracing::debug!(count = candidates.len(), "Retrieved candidates");
    Ok(candidates)
}
