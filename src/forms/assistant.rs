use crate::models::{ChatMessage, ChatRole, PricingModel, SearchFilters};
use crate::services::assistant::AskRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ChatTurn {
    pub role: ChatRole,
    #[validate(max_length = 4000)]
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct Filters {
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub pricing_model: Option<PricingModel>,
    pub api_available: Option<bool>,
    pub open_source: Option<bool>,
    #[validate(minimum = 0.0)]
    #[validate(maximum = 5.0)]
    pub min_rating: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct Ask {
    // at least one non-blank character
    #[validate(pattern = r"\S")]
    #[validate(max_length = 1000)]
    pub question: String,
    #[serde(default)]
    #[validate(max_items = 20)]
    #[validate]
    pub context: Vec<ChatTurn>,
    #[serde(default)]
    #[validate]
    pub filters: Option<Filters>,
}

impl From<ChatTurn> for ChatMessage {
    fn from(turn: ChatTurn) -> Self {
        ChatMessage {
            role: turn.role,
            content: turn.content,
            timestamp: turn.timestamp,
        }
    }
}

impl From<Filters> for SearchFilters {
    fn from(filters: Filters) -> Self {
        SearchFilters {
            category_id: filters.category_id,
            subcategory_id: filters.subcategory_id,
            pricing_model: filters.pricing_model,
            api_available: filters.api_available,
            open_source: filters.open_source,
            min_rating: filters.min_rating,
        }
    }
}

impl From<Ask> for AskRequest {
    fn from(form: Ask) -> Self {
        AskRequest {
            question: form.question.trim().to_string(),
            context: form.context.into_iter().map(Into::into).collect(),
            filters: form.filters.map(Into::into).unwrap_or_default(),
        }
    }
}
