use super::ToolCatalogConnector;
use crate::connectors::errors::ConnectorError;
use crate::models::{Category, CategoryOrder, CategorySortField, Tool, ToolQuery, ToolSort, ToolSortField};
use async_trait::async_trait;
use std::cmp::Ordering;

/// Immutable catalog snapshot held in memory.
///
/// Applies the same predicate and ordering rules as the Postgres catalog, including
/// `NULLS LAST` and the final name/id tiebreak.
#[derive(Debug, Clone, Default)]
pub struct InMemoryToolCatalog {
    tools: Vec<Tool>,
    categories: Vec<Category>,
}

impl InMemoryToolCatalog {
    pub fn new(tools: Vec<Tool>, categories: Vec<Category>) -> Self {
        Self { tools, categories }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    fn matches(tool: &Tool, query: &ToolQuery) -> bool {
        if tool.status != query.status {
            return false;
        }
        if !query.category_slugs.is_empty() {
            let in_category = tool
                .category_slug
                .as_ref()
                .map_or(false, |slug| query.category_slugs.contains(slug));
            if !in_category {
                return false;
            }
        }
        if query.category_id.is_some() && tool.category_id != query.category_id {
            return false;
        }
        if query.subcategory_id.is_some() && tool.subcategory_id != query.subcategory_id {
            return false;
        }
        if query.pricing_model.is_some() && tool.pricing_model != query.pricing_model {
            return false;
        }
        if let Some(api_available) = query.api_available {
            if tool.api_available != api_available {
                return false;
            }
        }
        if let Some(open_source) = query.open_source {
            if tool.open_source != open_source {
                return false;
            }
        }
        if let Some(min_rating) = query.min_rating {
            if tool.overall_rating < min_rating {
                return false;
            }
        }
        query.keywords.is_empty() || query.keywords.iter().any(|keyword| tool.mentions(keyword))
    }
}

fn score(tool: &Tool, field: ToolSortField) -> Option<f64> {
    match field {
        ToolSortField::OverallRating => Some(tool.overall_rating),
        ToolSortField::EaseOfUseScore => tool.ease_of_use_score,
        ToolSortField::PerformanceScore => tool.performance_score,
        ToolSortField::ValueForMoneyScore => tool.value_for_money_score,
    }
}

fn compare_by(a: &Tool, b: &Tool, sort: &ToolSort) -> Ordering {
    match (score(a, sort.field), score(b, sort.field)) {
        (Some(x), Some(y)) if sort.descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl ToolCatalogConnector for InMemoryToolCatalog {
    async fn query(&self, query: &ToolQuery) -> Result<Vec<Tool>, ConnectorError> {
        let mut found: Vec<Tool> = self
            .tools
            .iter()
            .filter(|tool| Self::matches(tool, query))
            .cloned()
            .collect();

        found.sort_by(|a, b| {
            std::iter::once(&query.sort)
                .chain(query.then_by.iter())
                .map(|sort| compare_by(a, b, sort))
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or_else(|| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)))
        });
        found.truncate(query.limit);

        Ok(found)
    }

    async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<Category>, ConnectorError> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .filter(|category| category.is_active)
            .cloned()
            .collect();

        categories.sort_by(|a, b| {
            let ordering = match order.field {
                CategorySortField::SortOrder => a.sort_order.cmp(&b.sort_order),
                CategorySortField::Name => a.name.cmp(&b.name),
            };
            let ordering = if order.ascending { ordering } else { ordering.reverse() };
            ordering.then_with(|| a.slug.cmp(&b.slug))
        });

        Ok(categories)
    }
}
