use crate::models::{PricingModel, ToolStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolSortField {
    OverallRating,
    EaseOfUseScore,
    PerformanceScore,
    ValueForMoneyScore,
}

impl ToolSortField {
    pub fn column(&self) -> &'static str {
        match self {
            ToolSortField::OverallRating => "overall_rating",
            ToolSortField::EaseOfUseScore => "ease_of_use_score",
            ToolSortField::PerformanceScore => "performance_score",
            ToolSortField::ValueForMoneyScore => "value_for_money_score",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSort {
    pub field: ToolSortField,
    pub descending: bool,
}

impl ToolSort {
    pub fn desc(field: ToolSortField) -> Self {
        Self {
            field,
            descending: true,
        }
    }
}

/// Filter, ordering and size limit for one catalog read.
///
/// All set predicates combine with AND. `category_slugs` and `keywords` are OR'd internally.
/// Sorting applies `sort` then each of `then_by`; missing scores always sort last and
/// remaining ties are broken by name, then id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolQuery {
    pub status: ToolStatus,
    pub category_slugs: Vec<String>,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub pricing_model: Option<PricingModel>,
    pub api_available: Option<bool>,
    pub open_source: Option<bool>,
    pub min_rating: Option<f64>,
    pub keywords: Vec<String>,
    pub sort: ToolSort,
    pub then_by: Vec<ToolSort>,
    pub limit: usize,
}

impl ToolQuery {
    /// Published tools, best rated first.
    pub fn published(limit: usize) -> Self {
        Self {
            status: ToolStatus::Published,
            category_slugs: vec![],
            category_id: None,
            subcategory_id: None,
            pricing_model: None,
            api_available: None,
            open_source: None,
            min_rating: None,
            keywords: vec![],
            sort: ToolSort::desc(ToolSortField::OverallRating),
            then_by: vec![],
            limit,
        }
    }

    pub fn sorted_by(mut self, sort: ToolSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn then_by(mut self, sort: ToolSort) -> Self {
        self.then_by.push(sort);
        self
    }
}

/// Structured filters supplied by the caller next to the free-text question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchFilters {
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub pricing_model: Option<PricingModel>,
    pub api_available: Option<bool>,
    pub open_source: Option<bool>,
    pub min_rating: Option<f64>,
}
