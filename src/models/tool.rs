use crate::models::{PricingModel, ToolStatus};
use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry as the assistant sees it. Read-only for the whole recommendation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, sqlx::FromRow)]
pub struct Tool {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub tagline: Option<String>,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    /// Slug of the category referenced by `category_id`, joined in by the catalog.
    pub category_slug: Option<String>,
    pub pricing_model: Option<PricingModel>,
    pub starting_price: Option<String>,
    pub overall_rating: f64,
    pub ease_of_use_score: Option<f64>,
    pub performance_score: Option<f64>,
    pub value_for_money_score: Option<f64>,
    pub api_available: bool,
    pub open_source: bool,
    pub gdpr_compliant: bool,
    pub integrations: Vec<String>,
    pub website_url: Option<String>,
    pub status: ToolStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tool {
    /// Case-insensitive substring match over name, description and tagline.
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        std::iter::once(Some(self.name.as_str()))
            .chain([self.description.as_deref(), self.tagline.as_deref()])
            .flatten()
            .any(|text| text.to_lowercase().contains(&needle))
    }
}
