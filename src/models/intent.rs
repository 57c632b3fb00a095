use crate::models::PricingModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSize {
    Startup,
    Sme,
    Enterprise,
}

/// What the asker cares about most. Drives the retrieval sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Price,
    #[default]
    Features,
    EaseOfUse,
    Performance,
    Integration,
}

/// Structured reading of a free-text question.
///
/// Built by `services::assistant::intent::analyze`; the same text always yields the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserIntent {
    pub keywords: Vec<String>,
    pub categories: Vec<String>,
    pub pricing_preference: Option<PricingModel>,
    pub business_size: Option<BusinessSize>,
    pub priority: Priority,
    pub is_general_question: bool,
}
